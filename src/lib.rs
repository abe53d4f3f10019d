//! Memo Sender Library
//!
//! Asks an external wallet to sign and submit a single SPL Memo transaction,
//! then waits for the network to confirm it.
//!
//! The entry point is [`MemoEngine::send_memo`]; wallets plug in through
//! [`session::WalletAdapter`] and the network through
//! [`rpc_manager::LedgerConnection`].

pub mod config;
pub mod errors;
pub mod memo_engine;
pub mod metrics;
pub mod session;
pub mod structured_logging;
pub mod tx_builder;
pub mod types;

// Component modules with non-standard paths (directories with spaces)
#[path = "rpc manager/mod.rs"]
pub mod rpc_manager;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use errors::MemoError;
pub use memo_engine::MemoEngine;
pub use solana_sdk::{pubkey::Pubkey, signature::Signature};
pub use types::{EngineState, MemoOutcome};
