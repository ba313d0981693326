use super::Submitter;
use crate::{
    domain::{
        errors::SubmitterError,
        models::{TransferPlan, TransferRequest, MAIN_TRANSFER_LAMPORTS, TIP_LAMPORTS},
    },
    infrastructure::{bc_client::BcClient, relay_client::RelayClient},
};
use solana_sdk::{
    hash::Hash, instruction::Instruction, signature::Signer, system_instruction,
    transaction::Transaction,
};
use std::time::Instant;
use typed_builder::TypedBuilder;

#[derive(Clone, TypedBuilder)]
pub struct TransactionSubmitter<C, R> {
    bc_client: C,
    relay: R,
    #[builder(default)]
    keep_alive: bool,
}

#[async_trait::async_trait]
impl<C, R> Submitter for TransactionSubmitter<C, R>
where
    C: BcClient + Send + Sync,
    R: RelayClient + Send + Sync,
{
    async fn submit(&self, request: &TransferRequest) -> Result<String, SubmitterError> {
        let plan = TransferPlan::parse(request)?;
        let recent_blockhash = self.bc_client.get_latest_blockhash().await?;

        let transaction = build_signed_transaction(&plan, recent_blockhash)?;
        let tx_bytes = serialize_transaction(&transaction)?;
        tracing::debug!(
            "Signed transaction {} ({} bytes) against blockhash {}",
            transaction.signatures[0],
            tx_bytes.len(),
            recent_blockhash
        );

        if self.keep_alive {
            if let Err(e) = self.relay.health().await {
                tracing::warn!("Relay keep-alive ping failed: {}", e);
            }
        }

        let started = Instant::now();
        let signature = self.relay.submit(&request.api_key, &tx_bytes).await?;
        tracing::info!(
            "Transaction {} accepted by relay in {:.2?}",
            signature,
            started.elapsed()
        );
        Ok(signature)
    }
}

/// Main transfer followed by the relay tip, both paid by the sender.
pub fn transfer_instructions(plan: &TransferPlan) -> [Instruction; 2] {
    let sender = plan.sender.pubkey();
    [
        system_instruction::transfer(&sender, &plan.recipient, MAIN_TRANSFER_LAMPORTS),
        system_instruction::transfer(&sender, &plan.tip_recipient, TIP_LAMPORTS),
    ]
}

/// Builds the two-instruction transaction with the sender as fee payer and signs it.
pub fn build_signed_transaction(
    plan: &TransferPlan,
    recent_blockhash: Hash,
) -> Result<Transaction, SubmitterError> {
    let payer = plan.sender.pubkey();
    let mut transaction = Transaction::new_with_payer(&transfer_instructions(plan), Some(&payer));
    transaction.try_sign(&[&plan.sender], recent_blockhash)?;
    Ok(transaction)
}

/// Wire-format bytes of a signed transaction.
pub fn serialize_transaction(transaction: &Transaction) -> Result<Vec<u8>, SubmitterError> {
    Ok(bincode::serialize(transaction)?)
}
