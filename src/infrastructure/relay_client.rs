use crate::domain::errors::RelayError;

/// A relay that forwards signed transactions into the network.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RelayClient {
    /// Submits serialized, signed transaction bytes.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Relay API key, passed through untouched.
    /// * `tx_bytes` - Wire-format signed transaction.
    ///
    /// # Returns
    ///
    /// * `Result<String, RelayError>` - The transaction signature reported by the relay.
    async fn submit(&self, api_key: &str, tx_bytes: &[u8]) -> Result<String, RelayError>;

    /// Pings the relay health endpoint to keep the connection warm.
    async fn health(&self) -> Result<(), RelayError>;
}
