//! Checkpoint context shared by building and confirmation
//!
//! A checkpoint is the recent blockhash a transaction is built against,
//! together with the last block height at which that blockhash is still
//! accepted. The same value must flow from the builder to the confirmation
//! poller: confirming against a fresher checkpoint can report a still-valid
//! transaction as expired.

use solana_sdk::hash::Hash;
use std::fmt;

/// Recent blockhash plus its expiry height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    /// Recent blockhash embedded in the transaction message
    pub blockhash: Hash,

    /// Last block height at which `blockhash` is valid
    pub last_valid_block_height: u64,
}

impl Checkpoint {
    pub fn new(blockhash: Hash, last_valid_block_height: u64) -> Self {
        Self {
            blockhash,
            last_valid_block_height,
        }
    }

    /// Whether a transaction built on this checkpoint can no longer land
    /// once the chain has reached `block_height`.
    pub fn is_expired_at(&self, block_height: u64) -> bool {
        block_height > self.last_valid_block_height
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (valid through block height {})",
            self.blockhash, self.last_valid_block_height
        )
    }
}
