use crate::domain::models::{RelayRegion, SubmitMode, DEFAULT_RPC_URL};
use solana_sdk::commitment_config::CommitmentConfig;
use typed_builder::TypedBuilder;

/// Endpoints and switches used to wire a submitter.
#[derive(Clone, Debug, TypedBuilder)]
pub struct SubmitterConfig {
    /// RPC endpoint queried for the recent blockhash
    #[builder(default = DEFAULT_RPC_URL.to_string(), setter(into))]
    pub rpc_url: String,
    /// Relay base URL, without the `/txb` path
    #[builder(default = RelayRegion::default().url().to_string(), setter(into))]
    pub relay_url: String,
    /// Commitment level of the blockhash query
    #[builder(default = CommitmentConfig::confirmed())]
    pub commitment: CommitmentConfig,
    #[builder(default)]
    pub mode: SubmitMode,
    /// Ping the relay health endpoint before submitting
    #[builder(default)]
    pub keep_alive: bool,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// An explicit relay URL wins over the region endpoint.
pub fn resolve_relay_url(region: RelayRegion, relay_url: Option<String>) -> String {
    relay_url.unwrap_or_else(|| region.url().to_string())
}
