//! Core memo transaction builder
//!
//! `TxBuilder` owns the encoded memo payload and compiles it, together with
//! a checkpoint and a fee payer, into an unsigned legacy transaction.

use crate::tx_builder::{
    context::Checkpoint,
    encoder::encode_message,
    errors::TransactionBuilderError,
    instructions::plan_memo_instructions,
    output::UnsignedTransaction,
};
use solana_sdk::{message::Message, pubkey::Pubkey, transaction::Transaction};
use tracing::debug;

/// Builder for single-instruction memo transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxBuilder {
    payload: Vec<u8>,
}

impl TxBuilder {
    /// Create a builder from an already encoded payload
    pub fn new(payload: Vec<u8>) -> Self {
        Self { payload }
    }

    /// Create a builder for a text message
    pub fn for_message(message: &str) -> Self {
        Self::new(encode_message(message))
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Build the unsigned memo transaction.
    ///
    /// The checkpoint is copied into the output, never modified.
    ///
    /// # Errors
    ///
    /// `TransactionBuilderError::MissingFeePayer` when `fee_payer` is `None`.
    pub fn build(
        &self,
        checkpoint: &Checkpoint,
        fee_payer: Option<Pubkey>,
    ) -> Result<UnsignedTransaction, TransactionBuilderError> {
        let fee_payer = fee_payer.ok_or_else(TransactionBuilderError::fee_payer_absent)?;
        let plan = plan_memo_instructions(&self.payload)?;

        let message =
            Message::new_with_blockhash(&plan.instructions, Some(&fee_payer), &checkpoint.blockhash);
        let transaction = Transaction::new_unsigned(message);

        debug!(
            fee_payer = %fee_payer,
            blockhash = %checkpoint.blockhash,
            payload_len = self.payload.len(),
            "Built unsigned memo transaction"
        );

        Ok(UnsignedTransaction::new(transaction, fee_payer, *checkpoint))
    }
}
