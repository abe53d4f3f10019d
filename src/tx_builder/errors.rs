//! Error types for the memo transaction builder
//!
//! Building a memo transaction is a pure, local operation. The only
//! things that can go wrong are a missing fee payer (the wallet authorized
//! no account) and a malformed instruction plan, which indicates a bug.

use thiserror::Error;

/// Error type for memo transaction building
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionBuilderError {
    /// No fee-payer identity was supplied
    ///
    /// The fee payer comes from the wallet authorization. A wallet that
    /// authorizes zero accounts ends up here.
    #[error("Missing fee payer: {0}")]
    MissingFeePayer(String),

    /// Failed to build an instruction for a specific program
    #[error("Instruction build error (program={program}): {reason}")]
    InstructionBuild {
        /// The program ID that failed to build an instruction
        program: String,
        /// Detailed reason for the failure
        reason: String,
    },

    /// The instruction list does not have the single-memo shape
    #[error("Invalid instruction plan: {0}")]
    InvalidInstructionPlan(String),
}

impl TransactionBuilderError {
    /// Get the error category for metrics and observability
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingFeePayer(_) => "fee_payer",
            Self::InstructionBuild { .. } => "instruction",
            Self::InvalidInstructionPlan(_) => "validation",
        }
    }
}

// Convenience constructors
impl TransactionBuilderError {
    pub fn fee_payer_absent() -> Self {
        Self::MissingFeePayer("wallet authorization carried no account".to_string())
    }

    pub fn instruction_failed(program: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InstructionBuild {
            program: program.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_plan(reason: impl Into<String>) -> Self {
        Self::InvalidInstructionPlan(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransactionBuilderError::fee_payer_absent();
        assert_eq!(
            err.to_string(),
            "Missing fee payer: wallet authorization carried no account"
        );

        let err = TransactionBuilderError::instruction_failed("memo", "empty accounts expected");
        assert_eq!(
            err.to_string(),
            "Instruction build error (program=memo): empty accounts expected"
        );
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(TransactionBuilderError::fee_payer_absent().category(), "fee_payer");
        assert_eq!(
            TransactionBuilderError::invalid_plan("x").category(),
            "validation"
        );
    }
}
