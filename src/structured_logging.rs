//! Structured logging and pipeline context

use uuid::Uuid;

/// Structured logger for memo pipeline events
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    context_id: String,
}

impl StructuredLogger {
    pub fn new(context_id: String) -> Self {
        Self { context_id }
    }

    pub fn context_id(&self) -> &str {
        &self.context_id
    }

    pub fn log_send_attempt(&self, payload_len: usize) {
        tracing::info!(
            context_id = %self.context_id,
            payload_len = %payload_len,
            "Attempting memo transaction"
        );
    }

    pub fn log_send_dropped(&self) {
        tracing::debug!(
            context_id = %self.context_id,
            "Memo request dropped: another memo is in flight"
        );
    }

    pub fn log_checkpoint(&self, blockhash: &str, last_valid_block_height: u64) {
        tracing::debug!(
            context_id = %self.context_id,
            blockhash = %blockhash,
            last_valid_block_height = %last_valid_block_height,
            "Checkpoint acquired"
        );
    }

    pub fn log_signature(&self, sig: &str) {
        tracing::info!(
            context_id = %self.context_id,
            signature = %sig,
            "Memo submitted, awaiting confirmation"
        );
    }

    pub fn log_confirmed(&self, sig: &str, latency_ms: u64) {
        tracing::info!(
            context_id = %self.context_id,
            signature = %sig,
            latency_ms = %latency_ms,
            "Memo confirmed"
        );
    }

    pub fn log_rejected_on_chain(&self, sig: &str, error: &str, latency_ms: u64) {
        tracing::warn!(
            context_id = %self.context_id,
            signature = %sig,
            error = %error,
            latency_ms = %latency_ms,
            "Memo landed but the program reported an error"
        );
    }

    pub fn log_failure(&self, category: &str, error: &str, latency_ms: u64) {
        tracing::warn!(
            context_id = %self.context_id,
            category = %category,
            error = %error,
            latency_ms = %latency_ms,
            "Memo attempt failed"
        );
    }
}

/// Pipeline execution context for one memo attempt
#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// Unique request ID
    pub request_id: String,

    /// Operation name
    pub operation: String,

    /// Unix timestamp (seconds) at creation
    pub timestamp: u64,

    /// Structured logger instance
    pub logger: StructuredLogger,
}

impl PipelineContext {
    /// Create a new pipeline context
    pub fn new(operation: &str) -> Self {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        let request_id = Uuid::new_v4().to_string();

        Self {
            request_id: request_id.clone(),
            operation: operation.to_string(),
            timestamp,
            logger: StructuredLogger::new(request_id),
        }
    }
}

impl Default for PipelineContext {
    fn default() -> Self {
        Self::new("default")
    }
}
