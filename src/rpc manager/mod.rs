//! RPC Manager Module
//!
//! Ledger-connection side of the memo flow: checkpoint fetch, confirmation
//! polling and RPC error classification.

// Submodules
pub mod confirmation;
pub mod ledger;
pub mod rpc_errors;

// Re-exports for convenience
pub use confirmation::{ConfirmationPoller, ConfirmationResult};
pub use ledger::{LedgerConnection, RpcLedger};
pub use rpc_errors::RpcManagerError;
