//! Common types used throughout the application

use crate::errors::MemoError;
use serde::{Deserialize, Serialize};
use solana_sdk::{signature::Signature, transaction::TransactionError};

/// Admission state of a `MemoEngine`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Ready to accept a memo
    Idle,
    /// A memo is being signed, submitted or confirmed
    InFlight,
}

/// Terminal result of one `send_memo` attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoOutcome {
    /// Landed and executed without error
    Confirmed { signature: Signature },

    /// Landed, but the program rejected it
    ConfirmedWithError {
        signature: Signature,
        error: TransactionError,
    },

    /// The attempt never completed
    Failed(MemoError),
}

impl MemoOutcome {
    /// The submitted signature, when the outcome carries one
    pub fn signature(&self) -> Option<&Signature> {
        match self {
            Self::Confirmed { signature } | Self::ConfirmedWithError { signature, .. } => {
                Some(signature)
            }
            Self::Failed(MemoError::TransactionExpired { signature, .. }) => Some(signature),
            Self::Failed(_) => None,
        }
    }

    /// The transaction reached the network and settled, with or without error
    pub fn is_completed(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }

    /// Short label for logs and metrics
    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirmed { .. } => "confirmed",
            Self::ConfirmedWithError { .. } => "confirmed_with_error",
            Self::Failed(_) => "failed",
        }
    }
}

impl From<Result<MemoOutcome, MemoError>> for MemoOutcome {
    fn from(result: Result<MemoOutcome, MemoError>) -> Self {
        result.unwrap_or_else(MemoOutcome::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_classes() {
        let sig = Signature::new_unique();
        assert!(MemoOutcome::Confirmed { signature: sig }.is_completed());
        assert!(MemoOutcome::ConfirmedWithError {
            signature: sig,
            error: TransactionError::AccountInUse,
        }
        .is_completed());
        assert!(!MemoOutcome::Failed(MemoError::SigningRejected("no".into())).is_completed());
    }

    #[test]
    fn test_on_chain_error_is_not_success() {
        let outcome = MemoOutcome::ConfirmedWithError {
            signature: Signature::new_unique(),
            error: TransactionError::AccountInUse,
        };
        assert!(!outcome.is_success());
        assert_eq!(outcome.label(), "confirmed_with_error");
    }

    #[test]
    fn test_signature_accessor() {
        let sig = Signature::new_unique();
        assert_eq!(MemoOutcome::Confirmed { signature: sig }.signature(), Some(&sig));
        assert_eq!(
            MemoOutcome::Failed(MemoError::SessionFailed("x".into())).signature(),
            None
        );
        let expired = MemoOutcome::Failed(MemoError::TransactionExpired {
            signature: sig,
            last_valid_block_height: 9,
        });
        assert_eq!(expired.signature(), Some(&sig));
    }

    #[test]
    fn test_from_result() {
        let outcome: MemoOutcome = Err(MemoError::SessionFailed("x".into())).into();
        assert_eq!(outcome, MemoOutcome::Failed(MemoError::SessionFailed("x".into())));
    }
}
