//! Ledger-connection provider
//!
//! The core needs exactly two things from the network: the current
//! checkpoint, and a wait-for-confirmation of a signature against the
//! checkpoint its transaction was built on. `RpcLedger` provides both over
//! JSON-RPC with the nonblocking `RpcClient`.

use super::confirmation::ConfirmationResult;
use super::rpc_errors::RpcManagerError;
use crate::tx_builder::Checkpoint;
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, signature::Signature};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

#[async_trait]
pub trait LedgerConnection: Send + Sync {
    /// Fetch the latest blockhash and its last valid block height
    async fn latest_checkpoint(&self) -> Result<Checkpoint, RpcManagerError>;

    /// Wait until `signature` reaches the configured commitment or the
    /// checkpoint expires. Expiry yields `ConfirmationResult::Pending`.
    async fn confirm_transaction(
        &self,
        signature: &Signature,
        checkpoint: &Checkpoint,
    ) -> Result<ConfirmationResult, RpcManagerError>;
}

/// JSON-RPC ledger connection
pub struct RpcLedger {
    client: Arc<RpcClient>,
    endpoint: String,
    commitment: CommitmentConfig,
    poll_interval: Duration,
    /// Per-request timeout the client was built with
    request_timeout: Duration,
}

impl RpcLedger {
    pub fn new(
        client: Arc<RpcClient>,
        commitment: CommitmentConfig,
        poll_interval: Duration,
        request_timeout: Duration,
    ) -> Self {
        let endpoint = client.url();
        Self {
            client,
            endpoint,
            commitment,
            poll_interval,
            request_timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.commitment
    }

    fn map_err(&self, err: solana_rpc_client_api::client_error::Error) -> RpcManagerError {
        RpcManagerError::from_client_error(err, &self.endpoint, self.request_timeout)
    }
}

#[async_trait]
impl LedgerConnection for RpcLedger {
    async fn latest_checkpoint(&self) -> Result<Checkpoint, RpcManagerError> {
        let (blockhash, last_valid_block_height) = self
            .client
            .get_latest_blockhash_with_commitment(self.commitment)
            .await
            .map_err(|e| self.map_err(e))?;

        debug!(
            blockhash = %blockhash,
            last_valid_block_height,
            "Fetched latest checkpoint"
        );
        Ok(Checkpoint::new(blockhash, last_valid_block_height))
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        checkpoint: &Checkpoint,
    ) -> Result<ConfirmationResult, RpcManagerError> {
        loop {
            let statuses = self
                .client
                .get_signature_statuses(std::slice::from_ref(signature))
                .await
                .map_err(|e| self.map_err(e))?
                .value;

            if let Some(Some(status)) = statuses.into_iter().next() {
                if status.satisfies_commitment(self.commitment) {
                    let err = status.err.map(Into::into);
                    return Ok(ConfirmationResult::from_status(status.slot, err));
                }
                trace!(signature = %signature, slot = status.slot, "Seen, below commitment");
            }

            let block_height = self
                .client
                .get_block_height_with_commitment(self.commitment)
                .await
                .map_err(|e| self.map_err(e))?;

            if checkpoint.is_expired_at(block_height) {
                debug!(
                    signature = %signature,
                    block_height,
                    last_valid_block_height = checkpoint.last_valid_block_height,
                    "Checkpoint expired before confirmation"
                );
                return Ok(ConfirmationResult::Pending);
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
