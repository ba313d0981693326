use super::config::SubmitterConfig;
use super::submitter::TransactionSubmitter;
use super::Submitter;
use crate::domain::errors::{RelayError, SubmitterError};
use crate::domain::models::TransferRequest;
use crate::infrastructure::solana_client::SolanaClient;
use crate::infrastructure::zeroslot::ZeroSlotRelay;

#[async_trait::async_trait]
pub trait Application {
    async fn send_transfer(&self, request: TransferRequest) -> Result<String, SubmitterError>;
}

#[derive(Clone)]
pub struct App<S> {
    submitter: S,
}

impl App<TransactionSubmitter<SolanaClient, ZeroSlotRelay>> {
    /// Wires the Solana RPC client and the 0slot relay described by `config`.
    pub fn new(config: &SubmitterConfig) -> Result<Self, RelayError> {
        let bc_client = SolanaClient::from_url(&config.rpc_url, config.commitment);
        let relay = ZeroSlotRelay::new(&config.relay_url, config.mode)?;
        tracing::info!(
            "Using rpc {} and relay {} ({:?} mode)",
            bc_client.url(),
            config.relay_url,
            relay.mode()
        );
        let submitter = TransactionSubmitter::builder()
            .bc_client(bc_client)
            .relay(relay)
            .keep_alive(config.keep_alive)
            .build();
        Ok(Self { submitter })
    }
}

impl<S> App<S> {
    pub fn with_submitter(submitter: S) -> Self {
        Self { submitter }
    }
}

#[async_trait::async_trait]
impl<S> Application for App<S>
where
    S: Submitter + Send + Sync,
{
    async fn send_transfer(&self, request: TransferRequest) -> Result<String, SubmitterError> {
        tracing::info!(
            "Sending transfer to {} with tip to {} ...",
            request.recipient_address,
            request.tip_address
        );
        self.submitter.submit(&request).await
    }
}
