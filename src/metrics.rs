//! Metrics collection and export module

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use std::time::Instant;

/// Global metrics registry
pub struct Metrics {
    registry: Registry,

    // Counters
    pub memos_requested: IntCounter,
    pub memos_dropped: IntCounter,
    pub memos_confirmed: IntCounter,
    pub memos_rejected_on_chain: IntCounter,
    pub memos_failed: IntCounterVec,

    // Session-related counters
    pub sessions_opened: IntCounter,
    pub sessions_released_explicit: IntCounter,
    pub sessions_released_auto: IntCounter,

    // Gauges
    pub active_sessions: IntGauge,
    pub memos_in_flight: IntGauge,

    // Histograms
    pub send_latency: Histogram,
    pub confirmation_latency: Histogram,
    pub session_lifetime: Histogram,
}

impl Metrics {
    /// Create new metrics instance
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let memos_requested = IntCounter::with_opts(Opts::new(
            "memos_requested_total",
            "Number of send_memo calls",
        ))?;

        let memos_dropped = IntCounter::with_opts(Opts::new(
            "memos_dropped_total",
            "Number of send_memo calls dropped because another was in flight",
        ))?;

        let memos_confirmed = IntCounter::with_opts(Opts::new(
            "memos_confirmed_total",
            "Number of memos confirmed without error",
        ))?;

        let memos_rejected_on_chain = IntCounter::with_opts(Opts::new(
            "memos_rejected_on_chain_total",
            "Number of memos confirmed with a program error",
        ))?;

        let memos_failed = IntCounterVec::new(
            Opts::new("memos_failed_total", "Number of memo attempts that never completed"),
            &["category"],
        )?;

        let sessions_opened = IntCounter::with_opts(Opts::new(
            "wallet_sessions_opened_total",
            "Number of wallet sessions opened",
        ))?;

        let sessions_released_explicit = IntCounter::with_opts(Opts::new(
            "wallet_sessions_released_explicit_total",
            "Number of wallet sessions closed explicitly",
        ))?;

        let sessions_released_auto = IntCounter::with_opts(Opts::new(
            "wallet_sessions_released_auto_total",
            "Number of wallet sessions aborted via Drop",
        ))?;

        let active_sessions = IntGauge::with_opts(Opts::new(
            "wallet_sessions_active",
            "Number of currently open wallet sessions",
        ))?;

        let memos_in_flight = IntGauge::with_opts(Opts::new(
            "memos_in_flight",
            "Number of memo submissions currently in flight",
        ))?;

        let send_latency = Histogram::with_opts(
            HistogramOpts::new("memo_send_latency_seconds", "End-to-end send_memo latency")
                .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0]),
        )?;

        let confirmation_latency = Histogram::with_opts(
            HistogramOpts::new(
                "memo_confirmation_latency_seconds",
                "Time spent waiting for confirmation",
            )
            .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0]),
        )?;

        let session_lifetime = Histogram::with_opts(
            HistogramOpts::new(
                "wallet_session_lifetime_seconds",
                "Duration wallet sessions are held open",
            )
            .buckets(vec![0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0]),
        )?;

        // Register all metrics
        registry.register(Box::new(memos_requested.clone()))?;
        registry.register(Box::new(memos_dropped.clone()))?;
        registry.register(Box::new(memos_confirmed.clone()))?;
        registry.register(Box::new(memos_rejected_on_chain.clone()))?;
        registry.register(Box::new(memos_failed.clone()))?;
        registry.register(Box::new(sessions_opened.clone()))?;
        registry.register(Box::new(sessions_released_explicit.clone()))?;
        registry.register(Box::new(sessions_released_auto.clone()))?;
        registry.register(Box::new(active_sessions.clone()))?;
        registry.register(Box::new(memos_in_flight.clone()))?;
        registry.register(Box::new(send_latency.clone()))?;
        registry.register(Box::new(confirmation_latency.clone()))?;
        registry.register(Box::new(session_lifetime.clone()))?;

        Ok(Self {
            registry,
            memos_requested,
            memos_dropped,
            memos_confirmed,
            memos_rejected_on_chain,
            memos_failed,
            sessions_opened,
            sessions_released_explicit,
            sessions_released_auto,
            active_sessions,
            memos_in_flight,
            send_latency,
            confirmation_latency,
            session_lifetime,
        })
    }

    /// Get the registry for exporting
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn gather_text(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// Global metrics instance
pub fn metrics() -> &'static Metrics {
    static METRICS: once_cell::sync::Lazy<Metrics> =
        once_cell::sync::Lazy::new(|| Metrics::new().expect("Failed to initialize metrics"));
    &METRICS
}

/// Timer helper for measuring operation duration
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn observe_duration(&self, histogram: &Histogram) {
        histogram.observe(self.elapsed_secs());
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
