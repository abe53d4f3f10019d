//! Signing Session Gateway
//!
//! Delegates signing to an out-of-process wallet through one exclusive,
//! scoped session per memo:
//!
//! - **adapter**: the wallet-session provider traits the core consumes
//! - **lease**: `SessionLease`, guaranteed session teardown (RAII)
//! - **gateway**: `SigningGateway`, authorize, build, sign-and-send
//! - **local**: keypair-file wallet used by the CLI
//! - **errors**: provider errors and their stage-aware mapping

pub mod adapter;
pub mod errors;
pub mod gateway;
pub mod lease;
pub mod local;

pub use adapter::{Authorization, WalletAdapter, WalletSession};
pub use errors::{SessionError, SessionStage};
pub use gateway::SigningGateway;
pub use lease::SessionLease;
pub use local::LocalWalletAdapter;
