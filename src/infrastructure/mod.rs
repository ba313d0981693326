pub mod bc_client;
pub mod relay_client;
pub mod solana_client;
pub mod zeroslot;
