use anchor_lang::prelude::*;
use anchor_lang::ToAccountMetas;
use solana_program::instruction::{AccountMeta, Instruction};
use tracing::debug;

use super::InstructionBuilder;
use crate::config::ProgramIds;
use crate::errors::Result;
use crate::pda;

/// sighash("initialize_reputation")
pub const INITIALIZE_REPUTATION_SELECTOR: [u8; 8] = [150, 240, 109, 53, 147, 42, 152, 162];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializeReputationAccounts {
    pub reputation_account: Pubkey,
    pub authority: Pubkey,
    pub system_program: Pubkey,
}

impl InitializeReputationAccounts {
    pub fn resolve(programs: &ProgramIds, authority: &Pubkey) -> Result<Self> {
        let (reputation_account, _) = pda::reputation_address(programs, authority)?;
        Ok(Self {
            reputation_account,
            authority: *authority,
            system_program: programs.system,
        })
    }
}

impl ToAccountMetas for InitializeReputationAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.reputation_account, false),
            AccountMeta::new(self.authority, true),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

impl InstructionBuilder {
    /// Create the reputation record for `authority`. Takes no arguments.
    pub fn initialize_reputation(&self, authority: &Pubkey) -> Result<Instruction> {
        let accounts = InitializeReputationAccounts::resolve(self.programs(), authority)?;

        debug!(
            "initialize_reputation: authority={}, reputation={}",
            authority, accounts.reputation_account
        );

        Ok(self.instruction(&accounts, INITIALIZE_REPUTATION_SELECTOR.to_vec()))
    }
}
