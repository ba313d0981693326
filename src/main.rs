use anyhow::Result;
use clap::{arg, command, Parser};
use tracing_subscriber::EnvFilter;
use zeroslot_submitter::application::app::{App, Application};
use zeroslot_submitter::application::config::{resolve_relay_url, SubmitterConfig};
use zeroslot_submitter::domain::models::{
    RelayRegion, SubmitMode, TransferRequest, DEFAULT_RPC_URL,
};

#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "Send a tipped Solana transfer through the 0slot relay"
)]
struct SubmitProgram {
    /// Relay API key
    #[arg(long, alias = "api_key")]
    api_key: String,

    /// Sender's base58 secret key used to sign the transaction
    #[arg(long, alias = "private_key")]
    private_key: String,

    /// Public key of the tip receiver
    #[arg(long, alias = "tip_key")]
    tip_key: String,

    /// Public key of the main receiver
    #[arg(long, alias = "to_public_key")]
    to_public_key: String,

    /// RPC endpoint used to fetch the recent blockhash
    #[arg(long, default_value = DEFAULT_RPC_URL)]
    rpc_url: String,

    /// Relay region: de, ny or ams
    #[arg(long, default_value = "de")]
    region: RelayRegion,

    /// Relay base URL, overrides the region
    #[arg(long)]
    relay_url: Option<String>,

    /// Submission mode: binary or json-rpc
    #[arg(long, default_value = "binary")]
    mode: SubmitMode,

    /// Ping the relay health endpoint before submitting
    #[arg(long, default_value_t = false)]
    keep_alive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = SubmitProgram::parse();

    let config = SubmitterConfig::builder()
        .rpc_url(args.rpc_url)
        .relay_url(resolve_relay_url(args.region, args.relay_url))
        .mode(args.mode)
        .keep_alive(args.keep_alive)
        .build();
    let request = TransferRequest {
        api_key: args.api_key,
        secret_key: args.private_key,
        tip_address: args.tip_key,
        recipient_address: args.to_public_key,
    };

    let app = App::new(&config)?;
    match app.send_transfer(request).await {
        Ok(signature) => {
            println!("{}", signature);
            Ok(())
        }
        Err(e) => {
            let kind = e.kind();
            let err = anyhow::Error::from(e);
            tracing::error!("Transaction submission failed ({:?}): {:#}", kind, err);
            Err(err)
        }
    }
}
