//! Caller-facing error taxonomy for memo submission
//!
//! Every failure of a `send_memo` attempt ends up as one of these kinds.
//! They propagate unchanged to the caller; nothing in the core retries.
//! A transaction that lands but fails in program logic is NOT an error
//! here, it is `MemoOutcome::ConfirmedWithError`.

use crate::tx_builder::TransactionBuilderError;
use solana_sdk::signature::Signature;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoError {
    /// The recent blockhash could not be fetched; no session was opened
    #[error("Checkpoint unavailable: {0}")]
    CheckpointUnavailable(String),

    /// The wallet declined to authorize a fee-payer account
    #[error("Authorization failed: {0}")]
    AuthorizationFailed(String),

    /// The signer session could not be established or broke mid-way
    #[error("Session failed: {0}")]
    SessionFailed(String),

    /// The user or wallet declined to sign (or to submit) the transaction
    #[error("Signing rejected: {0}")]
    SigningRejected(String),

    /// Transport failure while polling for confirmation
    ///
    /// The transaction may or may not have landed.
    #[error("Confirmation unavailable: {0}")]
    ConfirmationUnavailable(String),

    /// The blockhash expired before the signature reached the commitment
    #[error("Transaction expired: {signature} not confirmed by block height {last_valid_block_height}")]
    TransactionExpired {
        signature: Signature,
        last_valid_block_height: u64,
    },
}

impl MemoError {
    /// Whether a caller-driven retry (a fresh `send_memo`) is sensible.
    ///
    /// `ConfirmationUnavailable` is excluded: the first transaction may
    /// already be on chain.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::CheckpointUnavailable(_) => true,
            Self::AuthorizationFailed(_) => true,
            Self::SessionFailed(_) => true,
            Self::TransactionExpired { .. } => true,

            Self::SigningRejected(_) => false,
            Self::ConfirmationUnavailable(_) => false,
        }
    }

    /// Get the error category for metrics and observability
    pub fn category(&self) -> &'static str {
        match self {
            Self::CheckpointUnavailable(_) => "checkpoint",
            Self::AuthorizationFailed(_) => "authorization",
            Self::SessionFailed(_) => "session",
            Self::SigningRejected(_) => "signing",
            Self::ConfirmationUnavailable(_) => "confirmation",
            Self::TransactionExpired { .. } => "expired",
        }
    }
}

/// Building happens inside the wallet session. A missing fee payer means
/// the wallet authorized no account; anything else breaks the session.
impl From<TransactionBuilderError> for MemoError {
    fn from(err: TransactionBuilderError) -> Self {
        match err {
            TransactionBuilderError::MissingFeePayer(_) => {
                Self::AuthorizationFailed(err.to_string())
            }
            TransactionBuilderError::InstructionBuild { .. }
            | TransactionBuilderError::InvalidInstructionPlan(_) => {
                Self::SessionFailed(format!("build: {err}"))
            }
        }
    }
}
