//! Memo instruction planning and validation
//!
//! A memo transaction carries exactly one instruction: the SPL Memo program
//! with the encoded message as data and no account metas. With no accounts
//! the memo program does not check any signer beyond the fee payer.

use crate::tx_builder::errors::TransactionBuilderError;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};

/// SPL Memo program (v2)
pub const MEMO_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr");

/// Plan of instructions for a memo transaction
#[derive(Debug, Clone)]
pub struct InstructionPlan {
    /// The ordered list of instructions for the transaction
    pub instructions: Vec<Instruction>,
}

impl InstructionPlan {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

/// Build the memo instruction for an encoded payload.
///
/// The payload is copied as-is; the signer list is empty.
pub fn build_memo_instruction(payload: &[u8]) -> Instruction {
    Instruction::new_with_bytes(MEMO_PROGRAM_ID, payload, Vec::new())
}

/// Plan the instruction list for a memo transaction.
pub fn plan_memo_instructions(payload: &[u8]) -> Result<InstructionPlan, TransactionBuilderError> {
    let plan = InstructionPlan::new(vec![build_memo_instruction(payload)]);
    sanity_check_memo_plan(&plan.instructions)?;
    Ok(plan)
}

/// Validate that an instruction list has the single-memo shape.
///
/// # Errors
///
/// Returns `TransactionBuilderError::InvalidInstructionPlan` if:
/// - the list is empty or holds more than one instruction
/// - the instruction does not target the memo program
/// - the instruction carries account metas
pub fn sanity_check_memo_plan(instructions: &[Instruction]) -> Result<(), TransactionBuilderError> {
    let ix = match instructions {
        [] => return Err(TransactionBuilderError::invalid_plan("Instruction list is empty")),
        [ix] => ix,
        _ => {
            return Err(TransactionBuilderError::invalid_plan(format!(
                "Memo transaction must carry exactly one instruction, got {}",
                instructions.len()
            )))
        }
    };

    if ix.program_id != MEMO_PROGRAM_ID {
        return Err(TransactionBuilderError::invalid_plan(format!(
            "Instruction targets {} instead of the memo program",
            ix.program_id
        )));
    }

    if !ix.accounts.is_empty() {
        return Err(TransactionBuilderError::instruction_failed(
            MEMO_PROGRAM_ID.to_string(),
            format!("expected no signer accounts, got {}", ix.accounts.len()),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::instruction::AccountMeta;
    use std::str::FromStr;

    #[test]
    fn test_memo_program_id_matches_well_known_address() {
        let parsed = Pubkey::from_str("MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr").unwrap();
        assert_eq!(MEMO_PROGRAM_ID, parsed);
    }

    #[test]
    fn test_build_memo_instruction() {
        let ix = build_memo_instruction(b"Hello Solana!");
        assert_eq!(ix.program_id, MEMO_PROGRAM_ID);
        assert!(ix.accounts.is_empty());
        assert_eq!(ix.data, b"Hello Solana!".to_vec());
    }

    #[test]
    fn test_plan_has_single_instruction() {
        let plan = plan_memo_instructions(b"gm").unwrap();
        assert_eq!(plan.instructions.len(), 1);
    }

    #[test]
    fn test_sanity_check_rejects_empty() {
        let err = sanity_check_memo_plan(&[]).unwrap_err();
        assert!(matches!(err, TransactionBuilderError::InvalidInstructionPlan(_)));
    }

    #[test]
    fn test_sanity_check_rejects_two_memos() {
        let ixs = vec![build_memo_instruction(b"a"), build_memo_instruction(b"b")];
        assert!(sanity_check_memo_plan(&ixs).is_err());
    }

    #[test]
    fn test_sanity_check_rejects_other_program() {
        let ix = Instruction::new_with_bytes(Pubkey::new_unique(), b"x", Vec::new());
        let err = sanity_check_memo_plan(&[ix]).unwrap_err();
        assert!(err.to_string().contains("instead of the memo program"));
    }

    #[test]
    fn test_sanity_check_rejects_signer_accounts() {
        let ix = Instruction::new_with_bytes(
            MEMO_PROGRAM_ID,
            b"x",
            vec![AccountMeta::new_readonly(Pubkey::new_unique(), true)],
        );
        let err = sanity_check_memo_plan(&[ix]).unwrap_err();
        assert!(matches!(err, TransactionBuilderError::InstructionBuild { .. }));
    }
}
