use crate::domain::errors::BcClientError;
use solana_sdk::hash::Hash;

/// A trait representing a blockchain client for interacting with the Solana network.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait BcClient {
    /// Retrieves the most recent blockhash at the client's commitment level.
    ///
    /// # Returns
    ///
    /// * `Result<Hash, BcClientError>` - The blockhash if successful, or an error if the RPC call fails.
    async fn get_latest_blockhash(&self) -> Result<Hash, BcClientError>;
}
