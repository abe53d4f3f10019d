//! Test Helper Utilities
//!
//! - `MockWallet`: scripted wallet-session provider with session probes
//! - `SignGate`: pauses sign-and-send so tests can observe the in-flight state
//! - `MockLedger`: scripted checkpoint and confirmation replies

use crate::rpc_manager::{ConfirmationResult, LedgerConnection, RpcManagerError};
use crate::session::{Authorization, SessionError, WalletAdapter, WalletSession};
use crate::tx_builder::Checkpoint;
use async_trait::async_trait;
use solana_sdk::{
    hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction,
    transaction::TransactionError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// How the mock wallet answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletBehavior {
    Approve,
    Unreachable,
    DenyAuthorization,
    AuthorizeNoAccounts,
    DeclineSigning,
    NotSubmitted,
    NoSignature,
    DisconnectMidSession,
    CloseFails,
}

/// Pauses the wallet inside sign-and-send until released
#[derive(Default)]
pub struct SignGate {
    entered: Notify,
    release: Notify,
}

impl SignGate {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Wait until the wallet is blocked inside sign-and-send
    pub async fn wait_entered(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[derive(Default)]
pub struct WalletProbe {
    opened: AtomicUsize,
    closed: AtomicUsize,
    aborted: AtomicUsize,
    submitted: Mutex<Vec<Transaction>>,
}

pub struct MockWallet {
    pub fee_payer: Pubkey,
    pub signature: Signature,
    behavior: WalletBehavior,
    gate: Option<Arc<SignGate>>,
    probe: Arc<WalletProbe>,
}

impl MockWallet {
    pub fn new(behavior: WalletBehavior) -> Self {
        Self {
            fee_payer: Pubkey::new_unique(),
            signature: Signature::new_unique(),
            behavior,
            gate: None,
            probe: Arc::new(WalletProbe::default()),
        }
    }

    pub fn approving() -> Self {
        Self::new(WalletBehavior::Approve)
    }

    pub fn with_gate(mut self, gate: Arc<SignGate>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn sessions_opened(&self) -> usize {
        self.probe.opened.load(Ordering::SeqCst)
    }

    pub fn sessions_closed(&self) -> usize {
        self.probe.closed.load(Ordering::SeqCst)
    }

    pub fn sessions_aborted(&self) -> usize {
        self.probe.aborted.load(Ordering::SeqCst)
    }

    /// Transactions the wallet was asked to sign, in order
    pub fn submitted(&self) -> Vec<Transaction> {
        self.probe.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl WalletAdapter for MockWallet {
    async fn open_session(&self) -> Result<Box<dyn WalletSession>, SessionError> {
        if self.behavior == WalletBehavior::Unreachable {
            return Err(SessionError::Unreachable("no wallet app installed".to_string()));
        }
        self.probe.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockSession {
            fee_payer: self.fee_payer,
            signature: self.signature,
            behavior: self.behavior,
            gate: self.gate.clone(),
            probe: Arc::clone(&self.probe),
        }))
    }
}

struct MockSession {
    fee_payer: Pubkey,
    signature: Signature,
    behavior: WalletBehavior,
    gate: Option<Arc<SignGate>>,
    probe: Arc<WalletProbe>,
}

#[async_trait]
impl WalletSession for MockSession {
    async fn authorize(&mut self) -> Result<Authorization, SessionError> {
        match self.behavior {
            WalletBehavior::DenyAuthorization => {
                Err(SessionError::Declined("user denied authorization".to_string()))
            }
            WalletBehavior::AuthorizeNoAccounts => Ok(Authorization::default()),
            _ => Ok(Authorization {
                accounts: vec![self.fee_payer],
                auth_token: Some("mock-token".to_string()),
            }),
        }
    }

    async fn sign_and_send_transactions(
        &mut self,
        transactions: &[Transaction],
    ) -> Result<Vec<Signature>, SessionError> {
        self.probe
            .submitted
            .lock()
            .unwrap()
            .extend_from_slice(transactions);

        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }

        match self.behavior {
            WalletBehavior::DeclineSigning => {
                Err(SessionError::Declined("user declined to sign".to_string()))
            }
            WalletBehavior::NotSubmitted => Err(SessionError::NotSubmitted(
                "transaction too large".to_string(),
            )),
            WalletBehavior::DisconnectMidSession => {
                Err(SessionError::Closed("wallet app went away".to_string()))
            }
            WalletBehavior::NoSignature => Ok(Vec::new()),
            _ => Ok(vec![self.signature; transactions.len()]),
        }
    }

    async fn close(&mut self) -> Result<(), SessionError> {
        self.probe.closed.fetch_add(1, Ordering::SeqCst);
        if self.behavior == WalletBehavior::CloseFails {
            return Err(SessionError::Closed("already disconnected".to_string()));
        }
        Ok(())
    }

    fn abort(&mut self) {
        self.probe.aborted.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct MockLedger {
    pub checkpoint: Checkpoint,
    checkpoint_error: Option<RpcManagerError>,
    reply: Result<ConfirmationResult, RpcManagerError>,
    checkpoint_calls: AtomicUsize,
    confirmed_against: Mutex<Vec<(Signature, Checkpoint)>>,
}

impl MockLedger {
    fn with_reply(reply: Result<ConfirmationResult, RpcManagerError>) -> Self {
        Self {
            checkpoint: Checkpoint::new(Hash::new_unique(), 1_000),
            checkpoint_error: None,
            reply,
            checkpoint_calls: AtomicUsize::new(0),
            confirmed_against: Mutex::new(Vec::new()),
        }
    }

    pub fn confirming() -> Self {
        Self::with_reply(Ok(ConfirmationResult::Confirmed { slot: 42 }))
    }

    pub fn rejecting(error: TransactionError) -> Self {
        Self::with_reply(Ok(ConfirmationResult::ConfirmedWithError { slot: 42, error }))
    }

    pub fn expiring() -> Self {
        Self::with_reply(Ok(ConfirmationResult::Pending))
    }

    pub fn confirmation_unreachable() -> Self {
        Self::with_reply(Err(transport_error()))
    }

    pub fn checkpoint_unreachable() -> Self {
        let mut ledger = Self::confirming();
        ledger.checkpoint_error = Some(transport_error());
        ledger
    }

    pub fn checkpoint_calls(&self) -> usize {
        self.checkpoint_calls.load(Ordering::SeqCst)
    }

    pub fn confirm_calls(&self) -> usize {
        self.confirmed_against.lock().unwrap().len()
    }

    pub fn confirmed_against(&self) -> Vec<(Signature, Checkpoint)> {
        self.confirmed_against.lock().unwrap().clone()
    }
}

fn transport_error() -> RpcManagerError {
    RpcManagerError::Transport {
        endpoint: "http://mock".to_string(),
        message: "connection refused".to_string(),
    }
}

#[async_trait]
impl LedgerConnection for MockLedger {
    async fn latest_checkpoint(&self) -> Result<Checkpoint, RpcManagerError> {
        self.checkpoint_calls.fetch_add(1, Ordering::SeqCst);
        match &self.checkpoint_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.checkpoint),
        }
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        checkpoint: &Checkpoint,
    ) -> Result<ConfirmationResult, RpcManagerError> {
        self.confirmed_against
            .lock()
            .unwrap()
            .push((*signature, *checkpoint));
        self.reply.clone()
    }
}
