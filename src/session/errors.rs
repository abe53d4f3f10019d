//! Wallet session error types and stage-aware mapping
//!
//! Wallet providers report what went wrong; the gateway knows at which step
//! it went wrong. `SessionError::into_memo_error` combines the two into the
//! caller-facing `MemoError`.

use crate::errors::MemoError;
use std::fmt;
use thiserror::Error;

/// Errors reported by a wallet-session provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The user or the wallet declined the request
    #[error("Declined: {0}")]
    Declined(String),

    /// The wallet could not be reached
    #[error("Wallet unreachable: {0}")]
    Unreachable(String),

    /// The session was closed underneath us
    #[error("Session closed: {0}")]
    Closed(String),

    /// The wallet signed but could not submit the transaction
    #[error("Transaction not submitted: {0}")]
    NotSubmitted(String),

    /// Malformed request or response
    #[error("Protocol error: {0}")]
    Protocol(String),
}

/// Step of the session at which an error surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStage {
    Open,
    Authorize,
    SignAndSend,
    Close,
}

impl fmt::Display for SessionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::Authorize => "authorize",
            Self::SignAndSend => "sign_and_send",
            Self::Close => "close",
        };
        f.write_str(name)
    }
}

impl SessionError {
    /// Map a provider error to the caller-facing taxonomy.
    pub fn into_memo_error(self, stage: SessionStage) -> MemoError {
        match (stage, self) {
            (SessionStage::Authorize, Self::Declined(reason)) => {
                MemoError::AuthorizationFailed(reason)
            }
            (SessionStage::SignAndSend, Self::Declined(reason)) => {
                MemoError::SigningRejected(reason)
            }
            (SessionStage::SignAndSend, Self::NotSubmitted(reason)) => {
                MemoError::SigningRejected(format!("not submitted: {reason}"))
            }
            (stage, other) => MemoError::SessionFailed(format!("{stage}: {other}")),
        }
    }
}
