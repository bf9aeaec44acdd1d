use anchor_lang::prelude::*;
use anchor_lang::ToAccountMetas;
use solana_program::instruction::{AccountMeta, Instruction};
use tracing::debug;

use super::{instruction_data, InstructionBuilder};
use crate::config::ProgramIds;
use crate::errors::{ReputationError, Result};
use crate::pda;

/// sighash("log_service_transaction")
pub const LOG_SERVICE_TRANSACTION_SELECTOR: [u8; 8] = [83, 198, 223, 75, 249, 23, 99, 176];

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogServiceTransactionArgs {
    /// Payment in minor units (micro-USDC)
    pub amount: u64,
}

/// Accounts for `log_service_transaction`, in program order.
///
/// The program moves `amount` from the payer's token account to the agent's
/// and bumps the agent's reputation counters in the same instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogServiceTransactionAccounts {
    pub payer: Pubkey,
    /// The agent being paid
    pub authority: Pubkey,
    pub reputation_account: Pubkey,
    pub mint: Pubkey,
    pub payer_token_account: Pubkey,
    pub agent_token_account: Pubkey,
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub system_program: Pubkey,
}

impl LogServiceTransactionAccounts {
    pub fn resolve(
        programs: &ProgramIds,
        payer: &Pubkey,
        agent: &Pubkey,
        mint: &Pubkey,
    ) -> Result<Self> {
        let (reputation_account, _) = pda::reputation_address(programs, agent)?;
        Ok(Self {
            payer: *payer,
            authority: *agent,
            reputation_account,
            mint: *mint,
            payer_token_account: pda::associated_token_address(programs, mint, payer)?,
            agent_token_account: pda::associated_token_address(programs, mint, agent)?,
            token_program: programs.token,
            associated_token_program: programs.associated_token,
            system_program: programs.system,
        })
    }
}

impl ToAccountMetas for LogServiceTransactionAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.payer, true),
            AccountMeta::new_readonly(self.authority, false),
            AccountMeta::new(self.reputation_account, false),
            AccountMeta::new_readonly(self.mint, false),
            AccountMeta::new(self.payer_token_account, false),
            AccountMeta::new(self.agent_token_account, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

impl InstructionBuilder {
    /// Pay `agent` `amount` minor units of `mint` and record the payment
    /// against the agent's reputation.
    pub fn log_service_transaction(
        &self,
        payer: &Pubkey,
        agent: &Pubkey,
        mint: &Pubkey,
        amount: u64,
    ) -> Result<Instruction> {
        if amount == 0 {
            return Err(ReputationError::InvalidAmount(
                "payment must be at least one minor unit".to_string(),
            ));
        }

        let accounts = LogServiceTransactionAccounts::resolve(self.programs(), payer, agent, mint)?;
        let data = instruction_data(
            LOG_SERVICE_TRANSACTION_SELECTOR,
            &LogServiceTransactionArgs { amount },
        )?;

        debug!(
            "log_service_transaction: payer={}, agent={}, reputation={}, amount={}",
            payer, agent, accounts.reputation_account, amount
        );

        Ok(self.instruction(&accounts, data))
    }
}
