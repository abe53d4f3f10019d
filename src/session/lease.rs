//! Scoped wallet session with guaranteed release
//!
//! A `SessionLease` owns an open `WalletSession` and guarantees it is torn
//! down on every exit path:
//!
//! 1. **Explicit Release**: `release()` consumes the lease and awaits `close()`
//! 2. **Automatic Cleanup**: Drop calls the session's synchronous `abort()`
//!    if the lease was never released (panic, early return, cancelled future)
//! 3. **At Most Once**: a released lease never aborts on drop
//! 4. **No Async in Drop**: Drop only aborts, logs and updates metrics

use super::adapter::WalletSession;
use super::errors::SessionError;
use std::time::Instant;
use tracing::{debug, warn};

pub struct SessionLease {
    session: Box<dyn WalletSession>,
    opened_at: Instant,
    released: bool,
}

impl SessionLease {
    /// Take ownership of a freshly opened session
    pub fn new(session: Box<dyn WalletSession>) -> Self {
        let metrics = crate::metrics::metrics();
        metrics.sessions_opened.inc();
        metrics.active_sessions.inc();

        Self {
            session,
            opened_at: Instant::now(),
            released: false,
        }
    }

    /// Borrow the open session for authorize / sign-and-send calls
    pub fn session_mut(&mut self) -> &mut dyn WalletSession {
        self.session.as_mut()
    }

    /// Close the session explicitly.
    ///
    /// The lease counts as released even if `close()` fails; the wallet
    /// side is gone either way.
    pub async fn release(mut self) -> Result<(), SessionError> {
        self.released = true;
        let result = self.session.close().await;

        let held_secs = self.opened_at.elapsed().as_secs_f64();
        let metrics = crate::metrics::metrics();
        metrics.sessions_released_explicit.inc();
        metrics.session_lifetime.observe(held_secs);
        metrics.active_sessions.dec();

        debug!(
            held_duration_secs = %held_secs,
            release_type = "explicit",
            ok = result.is_ok(),
            "Wallet session closed"
        );

        result
    }
}

impl Drop for SessionLease {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let held_secs = self.opened_at.elapsed().as_secs_f64();
        let session = &mut self.session;
        if std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| session.abort())).is_err() {
            warn!("Panic caught while aborting wallet session in Drop");
        }

        let metrics = crate::metrics::metrics();
        metrics.sessions_released_auto.inc();
        metrics.session_lifetime.observe(held_secs);
        metrics.active_sessions.dec();

        warn!(
            held_duration_secs = %held_secs,
            release_type = "auto_drop",
            "Wallet session aborted on drop - should be explicitly released"
        );
    }
}
