use super::errors::InputError;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{keypair_from_seed, Keypair, Signer},
};
use std::{fmt, str::FromStr};

/// Lamports sent to the main recipient.
pub const MAIN_TRANSFER_LAMPORTS: u64 = 1;

/// Lamports tipped to the relay (0.001 SOL), the minimum the relay accepts.
pub const TIP_LAMPORTS: u64 = 1_000_000;

const SECRET_KEY_LEN: usize = 64;
const SEED_LEN: usize = 32;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Caller supplied inputs for one submission.
#[derive(Clone)]
pub struct TransferRequest {
    /// Relay API key, forwarded verbatim as the `api-key` query parameter
    pub api_key: String,
    /// Base58 encoded 64 byte secret key of the sender
    pub secret_key: String,
    /// Base58 address receiving the relay tip
    pub tip_address: String,
    /// Base58 address receiving the main transfer
    pub recipient_address: String,
}

// Keys stay out of debug output.
impl fmt::Debug for TransferRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferRequest")
            .field("api_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .field("tip_address", &self.tip_address)
            .field("recipient_address", &self.recipient_address)
            .finish()
    }
}

/// Parsed form of a [`TransferRequest`], ready to be turned into a transaction.
pub struct TransferPlan {
    pub sender: Keypair,
    pub recipient: Pubkey,
    pub tip_recipient: Pubkey,
}

impl TransferPlan {
    /// Decodes the secret key and both addresses. No network access happens here.
    pub fn parse(request: &TransferRequest) -> Result<Self, InputError> {
        let secret = bs58::decode(&request.secret_key)
            .into_vec()
            .map_err(|e| InputError::InvalidSecretKey(e.to_string()))?;
        let sender = parse_keypair(&secret)?;
        let recipient = parse_address("recipient", &request.recipient_address)?;
        let tip_recipient = parse_address("tip", &request.tip_address)?;

        Ok(Self {
            sender,
            recipient,
            tip_recipient,
        })
    }
}

/// The public half of the key must be the one derived from its seed half.
fn parse_keypair(secret: &[u8]) -> Result<Keypair, InputError> {
    if secret.len() != SECRET_KEY_LEN {
        return Err(InputError::InvalidSecretKey(format!(
            "expected {} bytes, got {}",
            SECRET_KEY_LEN,
            secret.len()
        )));
    }
    let (seed, public) = secret.split_at(SEED_LEN);
    let keypair =
        keypair_from_seed(seed).map_err(|e| InputError::InvalidSecretKey(e.to_string()))?;
    if keypair.pubkey().as_ref() != public {
        return Err(InputError::InvalidSecretKey(
            "public key does not match the secret seed".to_string(),
        ));
    }
    Ok(keypair)
}

fn parse_address(field: &'static str, value: &str) -> Result<Pubkey, InputError> {
    Pubkey::from_str(value).map_err(|e| InputError::InvalidAddress {
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// How the signed transaction is handed to the relay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitMode {
    /// Raw wire bytes posted to `/txb`
    #[default]
    Binary,
    /// Base64 transaction inside a JSON-RPC `sendTransaction` call
    JsonRpc,
}

impl FromStr for SubmitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" | "txb" => Ok(SubmitMode::Binary),
            "json-rpc" | "jsonrpc" | "rpc" => Ok(SubmitMode::JsonRpc),
            other => Err(format!("unknown submit mode `{other}`, expected binary or json-rpc")),
        }
    }
}

/// Relay landing regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RelayRegion {
    /// Frankfurt
    #[default]
    De,
    /// New York
    Ny,
    /// Amsterdam
    Ams,
}

impl RelayRegion {
    pub fn url(&self) -> &'static str {
        match self {
            RelayRegion::De => "https://de.0slot.trade",
            RelayRegion::Ny => "https://ny.0slot.trade",
            RelayRegion::Ams => "https://ams.0slot.trade",
        }
    }
}

impl FromStr for RelayRegion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "de" | "frankfurt" => Ok(RelayRegion::De),
            "ny" | "new-york" => Ok(RelayRegion::Ny),
            "ams" | "amsterdam" => Ok(RelayRegion::Ams),
            other => Err(format!("unknown relay region `{other}`, expected de, ny or ams")),
        }
    }
}
