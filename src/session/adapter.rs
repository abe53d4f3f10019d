//! Wallet-session provider surface
//!
//! The core consumes exactly this surface from an external wallet:
//! open a session, authorize, sign-and-send N transactions, close.
//! Implementations live outside the core (mobile wallet bridges) or in
//! `session::local` for a keypair on disk.

use super::errors::SessionError;
use async_trait::async_trait;
use solana_sdk::{pubkey::Pubkey, signature::Signature, transaction::Transaction};

/// Result of a successful authorization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authorization {
    /// Accounts the wallet authorized for this session, in wallet order
    pub accounts: Vec<Pubkey>,

    /// Opaque token the wallet may hand back for reauthorization
    pub auth_token: Option<String>,
}

impl Authorization {
    pub fn single(account: Pubkey) -> Self {
        Self {
            accounts: vec![account],
            auth_token: None,
        }
    }

    /// The fee payer is the first authorized account
    pub fn fee_payer(&self) -> Option<Pubkey> {
        self.accounts.first().copied()
    }
}

/// Factory for exclusive wallet sessions
#[async_trait]
pub trait WalletAdapter: Send + Sync {
    /// Open a session with one external signer
    async fn open_session(&self) -> Result<Box<dyn WalletSession>, SessionError>;
}

/// One open session with an external signer
#[async_trait]
pub trait WalletSession: Send {
    /// Request authorization and obtain the accounts bound to this session
    async fn authorize(&mut self) -> Result<Authorization, SessionError>;

    /// Sign the transactions and submit them to the network.
    ///
    /// Returns one signature per transaction, in order.
    async fn sign_and_send_transactions(
        &mut self,
        transactions: &[Transaction],
    ) -> Result<Vec<Signature>, SessionError>;

    /// Close the session gracefully
    async fn close(&mut self) -> Result<(), SessionError>;

    /// Synchronous teardown for a session dropped without `close()`
    /// (panic or cancelled future). Default is a no-op.
    fn abort(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_payer_is_first_account() {
        let first = Pubkey::new_unique();
        let auth = Authorization {
            accounts: vec![first, Pubkey::new_unique()],
            auth_token: Some("token".into()),
        };
        assert_eq!(auth.fee_payer(), Some(first));
    }

    #[test]
    fn test_empty_authorization_has_no_fee_payer() {
        assert_eq!(Authorization::default().fee_payer(), None);
    }
}
