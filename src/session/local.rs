//! Keypair-backed wallet provider
//!
//! Stands in for an external wallet app when running from a terminal: the
//! "wallet" is a keypair file on disk and "send" is a JSON-RPC
//! `sendTransaction` against the configured endpoint. Authorization always
//! yields the keypair's own account.

use super::adapter::{Authorization, WalletAdapter, WalletSession};
use super::errors::SessionError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_rpc_client_api::client_error::{Error as ClientError, ErrorKind as ClientErrorKind};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use zeroize::Zeroize;

/// Wallet provider backed by a local keypair
pub struct LocalWalletAdapter {
    keypair: Arc<Keypair>,
    client: Arc<RpcClient>,
}

impl LocalWalletAdapter {
    /// Load the keypair from a file (Solana CLI JSON array, base58 secret
    /// key, or raw 64 bytes)
    pub fn from_file(path: impl AsRef<Path>, client: Arc<RpcClient>) -> Result<Self> {
        let path = path.as_ref();
        let mut raw = std::fs::read(path)
            .with_context(|| format!("Failed to read keypair file: {}", path.display()))?;
        let keypair = keypair_from_bytes(&raw);
        raw.zeroize();

        Ok(Self::from_keypair(keypair?, client))
    }

    pub fn from_keypair(keypair: Keypair, client: Arc<RpcClient>) -> Self {
        Self {
            keypair: Arc::new(keypair),
            client,
        }
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }
}

/// Parse keypair bytes in either supported on-disk format.
pub fn keypair_from_bytes(raw: &[u8]) -> Result<Keypair> {
    let text = std::str::from_utf8(raw).map(str::trim).unwrap_or_default();
    let mut secret: Vec<u8> = if raw.len() == 64 {
        raw.to_vec()
    } else if text.starts_with('[') {
        serde_json::from_slice(raw).context("Failed to parse keypair JSON")?
    } else {
        bs58::decode(text)
            .into_vec()
            .context("Keypair is neither a JSON array nor base58")?
    };

    let parsed = if secret.len() != 64 {
        Err(anyhow::anyhow!(
            "Invalid keypair length: expected 64 bytes, got {}",
            secret.len()
        ))
    } else if secret.iter().all(|&b| b == 0) {
        Err(anyhow::anyhow!("Invalid keypair: all-zero key rejected"))
    } else {
        Keypair::try_from(secret.as_slice()).context("Invalid keypair bytes")
    };

    secret.zeroize();
    parsed
}

#[async_trait]
impl WalletAdapter for LocalWalletAdapter {
    async fn open_session(&self) -> Result<Box<dyn WalletSession>, SessionError> {
        Ok(Box::new(LocalWalletSession {
            keypair: Arc::clone(&self.keypair),
            client: Arc::clone(&self.client),
            authorized: false,
            closed: false,
        }))
    }
}

struct LocalWalletSession {
    keypair: Arc<Keypair>,
    client: Arc<RpcClient>,
    authorized: bool,
    closed: bool,
}

impl LocalWalletSession {
    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.closed {
            return Err(SessionError::Closed("session already closed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl WalletSession for LocalWalletSession {
    async fn authorize(&mut self) -> Result<Authorization, SessionError> {
        self.ensure_open()?;
        self.authorized = true;
        Ok(Authorization::single(self.keypair.pubkey()))
    }

    async fn sign_and_send_transactions(
        &mut self,
        transactions: &[Transaction],
    ) -> Result<Vec<Signature>, SessionError> {
        self.ensure_open()?;
        if !self.authorized {
            return Err(SessionError::Protocol(
                "sign_and_send requested before authorize".to_string(),
            ));
        }

        let mut signatures = Vec::with_capacity(transactions.len());
        for tx in transactions {
            let mut tx = tx.clone();
            let blockhash = tx.message.recent_blockhash;
            tx.try_sign(&[self.keypair.as_ref()], blockhash)
                .map_err(|e| SessionError::Protocol(format!("signing failed: {e}")))?;

            let signature = self
                .client
                .send_transaction(&tx)
                .await
                .map_err(classify_send_error)?;
            debug!(signature = %signature, "Local wallet submitted transaction");
            signatures.push(signature);
        }

        Ok(signatures)
    }

    async fn close(&mut self) -> Result<(), SessionError> {
        self.closed = true;
        Ok(())
    }

    fn abort(&mut self) {
        self.closed = true;
    }
}

/// The endpoint answering with an error means it refused the transaction;
/// anything else means it was never reached.
fn classify_send_error(err: ClientError) -> SessionError {
    match err.kind() {
        ClientErrorKind::RpcError(_) | ClientErrorKind::TransactionError(_) => {
            SessionError::NotSubmitted(err.to_string())
        }
        _ => SessionError::Unreachable(err.to_string()),
    }
}
