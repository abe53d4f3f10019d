//! Unsigned memo transaction
//!
//! `UnsignedTransaction` is the builder's output. It is immutable once
//! constructed: the wallet receives a reference and signs its own copy.

use crate::tx_builder::context::Checkpoint;
use solana_sdk::{instruction::CompiledInstruction, pubkey::Pubkey, transaction::Transaction};

/// A fully built, not yet signed memo transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedTransaction {
    transaction: Transaction,
    fee_payer: Pubkey,
    checkpoint: Checkpoint,
}

impl UnsignedTransaction {
    pub(crate) fn new(transaction: Transaction, fee_payer: Pubkey, checkpoint: Checkpoint) -> Self {
        Self {
            transaction,
            fee_payer,
            checkpoint,
        }
    }

    /// The legacy transaction handed to the wallet for sign-and-send
    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn fee_payer(&self) -> &Pubkey {
        &self.fee_payer
    }

    /// Checkpoint the message was compiled against
    pub fn checkpoint(&self) -> &Checkpoint {
        &self.checkpoint
    }

    pub fn instructions(&self) -> &[CompiledInstruction] {
        &self.transaction.message.instructions
    }

    /// Consume self and extract the transaction
    pub fn into_transaction(self) -> Transaction {
        self.transaction
    }
}
