//! Memo Transaction Builder
//!
//! Turns a text message into an unsigned Solana transaction that carries a
//! single SPL Memo instruction.
//!
//! ## Architecture
//!
//! - **encoder**: text to payload bytes (UTF-8)
//! - **context**: `Checkpoint`, the recent blockhash and its expiry height
//! - **instructions**: memo program constant, instruction planning and validation
//! - **builder**: `TxBuilder`, compiles payload + checkpoint + fee payer
//! - **output**: `UnsignedTransaction`, the immutable build result
//! - **errors**: builder error taxonomy
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use memo_sender::tx_builder::{Checkpoint, TxBuilder};
//! use solana_sdk::{hash::Hash, pubkey::Pubkey};
//!
//! # fn example() -> Result<(), memo_sender::tx_builder::TransactionBuilderError> {
//! let checkpoint = Checkpoint::new(Hash::new_unique(), 1_000);
//! let unsigned = TxBuilder::for_message("Hello Solana!")
//!     .build(&checkpoint, Some(Pubkey::new_unique()))?;
//! assert_eq!(unsigned.instructions().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub use errors::TransactionBuilderError;

mod builder;
mod context;
pub mod encoder;
pub mod instructions;
mod output;

pub use builder::TxBuilder;
pub use context::Checkpoint;
pub use encoder::{decode_message, encode_message};
pub use instructions::{
    build_memo_instruction, plan_memo_instructions, sanity_check_memo_plan, InstructionPlan,
    MEMO_PROGRAM_ID,
};
pub use output::UnsignedTransaction;
