use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, hash::Hash};
use std::sync::Arc;

use crate::domain::errors::BcClientError;

use super::bc_client::BcClient;

/// A client for interacting with the Solana blockchain.
#[derive(Clone)]
pub struct SolanaClient {
    rpc_client: Arc<RpcClient>,
}

impl SolanaClient {
    /// Creates a new `SolanaClient` instance from the given RPC URL.
    ///
    /// # Arguments
    ///
    /// * `rpc_url` - The URL of the Solana RPC endpoint.
    /// * `commitment` - Commitment level used for blockhash queries.
    ///
    /// # Returns
    ///
    /// A new `SolanaClient` instance.
    pub fn from_url(rpc_url: &str, commitment: CommitmentConfig) -> Self {
        Self {
            rpc_client: Arc::new(RpcClient::new_with_commitment(
                rpc_url.to_string(),
                commitment,
            )),
        }
    }

    pub fn url(&self) -> String {
        self.rpc_client.url()
    }
}

#[async_trait::async_trait]
impl BcClient for SolanaClient {
    /// Retrieves the latest blockhash. Failures are returned as-is, without retrying.
    async fn get_latest_blockhash(&self) -> Result<Hash, BcClientError> {
        let blockhash = self
            .rpc_client
            .get_latest_blockhash()
            .await
            .map_err(|e| BcClientError::FailedToGetLatestBlockhash(e.to_string()))?;
        tracing::debug!("Fetched latest blockhash {}", blockhash);
        Ok(blockhash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_rpc_surfaces_blockhash_error() {
        // Port 9 (discard) on loopback is not serving JSON-RPC.
        let client = SolanaClient::from_url("http://127.0.0.1:9", CommitmentConfig::confirmed());

        let result = client.get_latest_blockhash().await;

        assert!(matches!(
            result,
            Err(BcClientError::FailedToGetLatestBlockhash(_))
        ));
    }

    #[test]
    fn keeps_configured_endpoint() {
        let client = SolanaClient::from_url(
            "https://api.mainnet-beta.solana.com",
            CommitmentConfig::confirmed(),
        );
        assert_eq!(client.url(), "https://api.mainnet-beta.solana.com");
    }
}
