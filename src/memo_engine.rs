//! Memo engine: orchestrates one memo submission end to end
//!
//! ```text
//! idle -> in-flight -> { confirmed | confirmed-with-error | failed } -> idle
//! ```
//!
//! The steps run strictly in order, each awaiting the previous one:
//! encode, fetch checkpoint, wallet session (authorize, build,
//! sign-and-send), confirmation against the same checkpoint.
//!
//! Admission is a single slot per engine. A `send_memo` that arrives while
//! another is in flight is dropped (returns `None`), never queued. The slot
//! is taken before the first await point and released by a scope guard on
//! every exit, including a cancelled future.

use crate::errors::MemoError;
use crate::metrics::{metrics, Timer};
use crate::rpc_manager::{ConfirmationPoller, ConfirmationResult, LedgerConnection};
use crate::session::{SigningGateway, WalletAdapter};
use crate::structured_logging::PipelineContext;
use crate::tx_builder::TxBuilder;
use crate::types::{EngineState, MemoOutcome};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct MemoEngine {
    ledger: Arc<dyn LedgerConnection>,
    gateway: SigningGateway,
    poller: ConfirmationPoller,
    in_flight: AtomicBool,
}

impl MemoEngine {
    pub fn new(wallet: Arc<dyn WalletAdapter>, ledger: Arc<dyn LedgerConnection>) -> Self {
        Self {
            gateway: SigningGateway::new(wallet),
            poller: ConfirmationPoller::new(Arc::clone(&ledger)),
            ledger,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> EngineState {
        if self.in_flight.load(Ordering::Acquire) {
            EngineState::InFlight
        } else {
            EngineState::Idle
        }
    }

    /// Record `message` on chain.
    ///
    /// Returns `None` when another memo is already in flight on this engine.
    pub async fn send_memo(&self, message: &str) -> Option<MemoOutcome> {
        let m = metrics();
        m.memos_requested.inc();
        let ctx = PipelineContext::new("send_memo");

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            m.memos_dropped.inc();
            ctx.logger.log_send_dropped();
            return None;
        }
        m.memos_in_flight.inc();

        // Ensure we clear the in-flight flag on exit
        let _guard = scopeguard::guard((), |_| {
            self.in_flight.store(false, Ordering::Release);
            metrics().memos_in_flight.dec();
        });

        let timer = Timer::new();
        let outcome = MemoOutcome::from(self.run(message, &ctx).await);
        timer.observe_duration(&m.send_latency);

        Self::record_outcome(&ctx, &outcome, (timer.elapsed_secs() * 1000.0) as u64);
        Some(outcome)
    }

    async fn run(&self, message: &str, ctx: &PipelineContext) -> Result<MemoOutcome, MemoError> {
        let builder = TxBuilder::for_message(message);
        ctx.logger.log_send_attempt(builder.payload().len());

        let checkpoint = self
            .ledger
            .latest_checkpoint()
            .await
            .map_err(|e| MemoError::CheckpointUnavailable(e.to_string()))?;
        ctx.logger.log_checkpoint(
            &checkpoint.blockhash.to_string(),
            checkpoint.last_valid_block_height,
        );

        let signature = self.gateway.sign_and_submit(&builder, &checkpoint).await?;
        ctx.logger.log_signature(&signature.to_string());

        match self.poller.await_confirmation(&signature, &checkpoint).await? {
            ConfirmationResult::Confirmed { .. } => Ok(MemoOutcome::Confirmed { signature }),
            ConfirmationResult::ConfirmedWithError { error, .. } => {
                Ok(MemoOutcome::ConfirmedWithError { signature, error })
            }
            ConfirmationResult::Pending => Err(MemoError::TransactionExpired {
                signature,
                last_valid_block_height: checkpoint.last_valid_block_height,
            }),
        }
    }

    fn record_outcome(ctx: &PipelineContext, outcome: &MemoOutcome, latency_ms: u64) {
        let m = metrics();
        match outcome {
            MemoOutcome::Confirmed { signature } => {
                m.memos_confirmed.inc();
                ctx.logger.log_confirmed(&signature.to_string(), latency_ms);
            }
            MemoOutcome::ConfirmedWithError { signature, error } => {
                m.memos_rejected_on_chain.inc();
                ctx.logger
                    .log_rejected_on_chain(&signature.to_string(), &error.to_string(), latency_ms);
            }
            MemoOutcome::Failed(e) => {
                m.memos_failed.with_label_values(&[e.category()]).inc();
                ctx.logger.log_failure(e.category(), &e.to_string(), latency_ms);
            }
        }
    }
}
