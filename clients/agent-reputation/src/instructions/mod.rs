//! Instruction assembly for the reputation program.
//!
//! Each instruction file holds the argument struct, the ordered account list
//! and the builder method for one program instruction. Builders are pure:
//! they derive addresses and encode arguments but never sign or send.

pub mod initialize_reputation;
pub mod log_service_transaction;
pub mod register_identity;

pub use initialize_reputation::*;
pub use log_service_transaction::*;
pub use register_identity::*;

use anchor_lang::prelude::*;
use anchor_lang::ToAccountMetas;
use solana_program::hash::hash;
use solana_program::instruction::Instruction;

use crate::config::ProgramIds;
use crate::errors::Result;

/// Anchor instruction selector: first 8 bytes of sha256("global:<name>").
pub fn sighash(name: &str) -> [u8; 8] {
    let preimage = format!("global:{name}");
    let mut selector = [0u8; 8];
    selector.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    selector
}

/// Selector followed by the borsh encoding of `args`.
pub fn instruction_data<A: AnchorSerialize>(selector: [u8; 8], args: &A) -> Result<Vec<u8>> {
    let mut data = selector.to_vec();
    args.serialize(&mut data)?;
    Ok(data)
}

/// Assembles reputation program instructions against one program table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstructionBuilder {
    programs: ProgramIds,
}

impl InstructionBuilder {
    pub fn new(programs: ProgramIds) -> Self {
        Self { programs }
    }

    pub fn programs(&self) -> &ProgramIds {
        &self.programs
    }

    fn instruction<A: ToAccountMetas>(&self, accounts: &A, data: Vec<u8>) -> Instruction {
        Instruction {
            program_id: self.programs.reputation,
            accounts: accounts.to_account_metas(None),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_match_anchor_sighash() {
        assert_eq!(sighash("register_identity"), REGISTER_IDENTITY_SELECTOR);
        assert_eq!(sighash("initialize_reputation"), INITIALIZE_REPUTATION_SELECTOR);
        assert_eq!(sighash("log_service_transaction"), LOG_SERVICE_TRANSACTION_SELECTOR);
    }

    #[test]
    fn test_instruction_data_prefixes_selector() {
        let data = instruction_data([9u8; 8], &7u64).unwrap();
        assert_eq!(&data[..8], &[9u8; 8]);
        assert_eq!(&data[8..], &7u64.to_le_bytes());
    }

    #[test]
    fn test_builder_targets_configured_program() {
        let local = Pubkey::new_unique();
        let builder = InstructionBuilder::new(ProgramIds {
            reputation: local,
            ..ProgramIds::default()
        });
        let ix = builder.initialize_reputation(&Pubkey::new_unique()).unwrap();
        assert_eq!(ix.program_id, local);
    }
}
