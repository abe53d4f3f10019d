//! Signing session gateway
//!
//! Runs one scoped wallet session: open, authorize, build the memo
//! transaction for the authorized fee payer, sign-and-send it, close.
//! Sessions are exclusive per gateway and never nested. Nothing here is
//! retried; the first failure is mapped and returned.

use super::adapter::WalletAdapter;
use super::errors::SessionStage;
use super::lease::SessionLease;
use crate::errors::MemoError;
use crate::tx_builder::{Checkpoint, TxBuilder};
use solana_sdk::signature::Signature;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub struct SigningGateway {
    adapter: Arc<dyn WalletAdapter>,
    /// Held for the whole lifetime of a session
    session_slot: Mutex<()>,
}

impl SigningGateway {
    pub fn new(adapter: Arc<dyn WalletAdapter>) -> Self {
        Self {
            adapter,
            session_slot: Mutex::new(()),
        }
    }

    /// Authorize, build against `checkpoint`, and sign-and-submit one memo
    /// transaction. The session is closed before this returns.
    pub async fn sign_and_submit(
        &self,
        builder: &TxBuilder,
        checkpoint: &Checkpoint,
    ) -> Result<Signature, MemoError> {
        let _slot = self.session_slot.try_lock().map_err(|_| {
            MemoError::SessionFailed("a wallet session is already open".to_string())
        })?;

        let session = self
            .adapter
            .open_session()
            .await
            .map_err(|e| e.into_memo_error(SessionStage::Open))?;
        let mut lease = SessionLease::new(session);

        let result = Self::run_session(&mut lease, builder, checkpoint).await;

        if let Err(close_err) = lease.release().await {
            // The transaction is already out once a signature exists
            warn!(
                error = %close_err,
                signed = result.is_ok(),
                "Wallet session did not close cleanly"
            );
        }

        result
    }

    async fn run_session(
        lease: &mut SessionLease,
        builder: &TxBuilder,
        checkpoint: &Checkpoint,
    ) -> Result<Signature, MemoError> {
        let session = lease.session_mut();

        let authorization = session
            .authorize()
            .await
            .map_err(|e| e.into_memo_error(SessionStage::Authorize))?;
        debug!(accounts = authorization.accounts.len(), "Wallet authorized");

        let unsigned = builder
            .build(checkpoint, authorization.fee_payer())
            .map_err(MemoError::from)?;

        let signatures = session
            .sign_and_send_transactions(std::slice::from_ref(unsigned.transaction()))
            .await
            .map_err(|e| e.into_memo_error(SessionStage::SignAndSend))?;

        let signature = signatures.into_iter().next().ok_or_else(|| {
            MemoError::SessionFailed("wallet returned no signature".to_string())
        })?;

        info!(
            signature = %signature,
            fee_payer = %unsigned.fee_payer(),
            "Memo transaction signed and submitted"
        );

        Ok(signature)
    }
}
