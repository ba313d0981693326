use crate::domain::{errors::SubmitterError, models::TransferRequest};

pub mod app;
pub mod config;
pub mod submitter;

/// The `Submitter` trait defines the core functionality for relay submission.
///
/// Implementors take a [`TransferRequest`], turn it into a signed transaction
/// carrying the main transfer and the relay tip, and hand it to a relay.
///
/// # Examples
///
/// ```no_run
/// use zeroslot_submitter::application::Submitter;
/// use zeroslot_submitter::domain::{errors::SubmitterError, models::TransferRequest};
///
/// struct DryRun;
///
/// #[async_trait::async_trait]
/// impl Submitter for DryRun {
///     async fn submit(&self, _request: &TransferRequest) -> Result<String, SubmitterError> {
///         Ok(String::new())
///     }
/// }
/// ```
///
/// # Errors
///
/// The `submit` method returns a `Result` where the `Err` variant is a `SubmitterError`,
/// whose `kind()` tells input, blockhash, signing and relay failures apart.
#[async_trait::async_trait]
pub trait Submitter {
    async fn submit(&self, request: &TransferRequest) -> Result<String, SubmitterError>;
}
