use thiserror::Error;

/// Coarse classification of a failed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed secret key or address, detected before any network call
    Input,
    /// The RPC node could not supply a recent blockhash
    BlockhashFetch,
    /// The transaction could not be signed or serialized
    Signing,
    /// The relay rejected the transaction or could not be reached
    Submission,
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid secret key: {0}")]
    InvalidSecretKey(String),
    #[error("Invalid {field} address {value}: {reason}")]
    InvalidAddress {
        field: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum BcClientError {
    #[error("Failed to get latest blockhash: {0}")]
    FailedToGetLatestBlockhash(String),
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Relay returned HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("Relay request failed: {0}")]
    Transport(String),
    #[error("Relay rpc error {code}: {message}")]
    JsonRpc { code: i64, message: String },
    #[error("Relay returned a malformed response: {0}")]
    MalformedResponse(String),
    #[error("Invalid relay endpoint {0}")]
    InvalidEndpoint(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => RelayError::HttpStatus {
                status: status.as_u16(),
                body: err.to_string(),
            },
            None => RelayError::Transport(err.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum SubmitterError {
    #[error("Invalid input")]
    Input(#[from] InputError),
    #[error("Failed to fetch recent blockhash")]
    BlockhashFetch(#[from] BcClientError),
    #[error("Failed to sign transaction")]
    Signing(#[from] solana_sdk::signer::SignerError),
    #[error("Failed to serialize signed transaction")]
    Serialization(#[from] bincode::Error),
    #[error("Failed to submit transaction to relay")]
    Submission(#[from] RelayError),
}

impl SubmitterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmitterError::Input(_) => ErrorKind::Input,
            SubmitterError::BlockhashFetch(_) => ErrorKind::BlockhashFetch,
            SubmitterError::Signing(_) | SubmitterError::Serialization(_) => ErrorKind::Signing,
            SubmitterError::Submission(_) => ErrorKind::Submission,
        }
    }

    /// HTTP status reported by the relay, if the failure was a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitterError::Submission(RelayError::HttpStatus { status, .. }) => Some(*status),
            _ => None,
        }
    }
}
