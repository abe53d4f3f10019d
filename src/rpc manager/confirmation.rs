//! Confirmation poller
//!
//! Waits for a submitted signature to settle, always against the checkpoint
//! the transaction was built on. Transport failures surface as
//! `MemoError::ConfirmationUnavailable` and are not retried here.

use super::ledger::LedgerConnection;
use crate::errors::MemoError;
use crate::metrics::{metrics, Timer};
use crate::tx_builder::Checkpoint;
use solana_sdk::{signature::Signature, transaction::TransactionError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Settlement state of a submitted transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationResult {
    /// Not settled (returned once the checkpoint expired)
    Pending,

    /// Settled without error
    Confirmed { slot: u64 },

    /// Settled, but the program reported an error
    ConfirmedWithError { slot: u64, error: TransactionError },
}

impl ConfirmationResult {
    pub fn from_status(slot: u64, err: Option<TransactionError>) -> Self {
        match err {
            None => Self::Confirmed { slot },
            Some(error) => Self::ConfirmedWithError { slot, error },
        }
    }

    /// Settled results never change
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub fn error(&self) -> Option<&TransactionError> {
        match self {
            Self::ConfirmedWithError { error, .. } => Some(error),
            _ => None,
        }
    }
}

pub struct ConfirmationPoller {
    ledger: Arc<dyn LedgerConnection>,
}

impl ConfirmationPoller {
    pub fn new(ledger: Arc<dyn LedgerConnection>) -> Self {
        Self { ledger }
    }

    /// Block until `signature` settles or `checkpoint` expires.
    pub async fn await_confirmation(
        &self,
        signature: &Signature,
        checkpoint: &Checkpoint,
    ) -> Result<ConfirmationResult, MemoError> {
        let timer = Timer::new();
        let result = self.ledger.confirm_transaction(signature, checkpoint).await;
        timer.observe_duration(&metrics().confirmation_latency);

        match result {
            Ok(result) => {
                debug!(signature = %signature, result = ?result, "Confirmation resolved");
                Ok(result)
            }
            Err(e) => {
                warn!(signature = %signature, error = %e, "Confirmation polling failed");
                Err(MemoError::ConfirmationUnavailable(e.to_string()))
            }
        }
    }
}
