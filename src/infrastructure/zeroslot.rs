//! 0slot relay client over HTTP.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use reqwest::{header::CONTENT_TYPE, Client, Url};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::{errors::RelayError, models::SubmitMode};

use super::relay_client::RelayClient;

/// The relay closes idle connections after 415 seconds.
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(410);
const POOL_MAX_IDLE_PER_HOST: usize = 3;

/// Relay client for the 0slot landing service.
#[derive(Clone, Debug)]
pub struct ZeroSlotRelay {
    client: Client,
    base_url: Url,
    mode: SubmitMode,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    result: Option<String>,
    error: Option<JsonRpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcErrorBody {
    code: i64,
    message: String,
}

impl ZeroSlotRelay {
    /// Creates a relay client for the given base URL, e.g. `https://de.0slot.trade`.
    pub fn new(base_url: &str, mode: SubmitMode) -> Result<Self, RelayError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| RelayError::InvalidEndpoint(format!("{base_url}: {e}")))?;
        let client = Client::builder()
            .pool_idle_timeout(POOL_IDLE_TIMEOUT)
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .build()?;
        Ok(Self {
            client,
            base_url,
            mode,
        })
    }

    pub fn mode(&self) -> SubmitMode {
        self.mode
    }

    /// Endpoint receiving a submission, with the API key attached as `api-key`.
    pub fn submit_url(&self, api_key: &str) -> Result<Url, RelayError> {
        let path = match self.mode {
            SubmitMode::Binary => "txb",
            SubmitMode::JsonRpc => "",
        };
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut().append_pair("api-key", api_key);
        Ok(url)
    }

    /// Appends `path` to the base URL path, keeping any query the base carries.
    fn endpoint(&self, path: &str) -> Result<Url, RelayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RelayError::InvalidEndpoint(self.base_url.to_string()))?
            .pop_if_empty()
            .push(path);
        Ok(url)
    }

    async fn submit_binary(&self, url: Url, tx_bytes: &[u8]) -> Result<String, RelayError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "text/plain")
            .body(tx_bytes.to_vec())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The status is reported even if the body cannot be read.
            return Err(RelayError::HttpStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body = response.text().await?;
        let signature = body.trim();
        if signature.is_empty() {
            return Err(RelayError::MalformedResponse(
                "empty response body".to_string(),
            ));
        }
        Ok(signature.to_string())
    }

    async fn submit_json_rpc(&self, url: Url, tx_bytes: &[u8]) -> Result<String, RelayError> {
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "sendTransaction",
            "params": [
                BASE64_STANDARD.encode(tx_bytes),
                {
                    "encoding": "base64",
                    "skipPreflight": true
                }
            ]
        });

        let response = self.client.post(url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: JsonRpcResponse = response
            .json()
            .await
            .map_err(|e| RelayError::MalformedResponse(e.to_string()))?;

        match (parsed.result, parsed.error) {
            (Some(signature), _) => Ok(signature),
            (None, Some(error)) => Err(RelayError::JsonRpc {
                code: error.code,
                message: error.message,
            }),
            (None, None) => Err(RelayError::MalformedResponse(
                "neither result nor error in rpc response".to_string(),
            )),
        }
    }
}

#[async_trait::async_trait]
impl RelayClient for ZeroSlotRelay {
    async fn submit(&self, api_key: &str, tx_bytes: &[u8]) -> Result<String, RelayError> {
        let url = self.submit_url(api_key)?;
        match self.mode {
            SubmitMode::Binary => self.submit_binary(url, tx_bytes).await,
            SubmitMode::JsonRpc => self.submit_json_rpc(url, tx_bytes).await,
        }
    }

    async fn health(&self) -> Result<(), RelayError> {
        let url = self.endpoint("health")?;
        // Any response keeps the connection alive; only the status is checked.
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::HttpStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}
