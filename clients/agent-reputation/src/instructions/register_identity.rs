use anchor_lang::prelude::*;
use anchor_lang::ToAccountMetas;
use solana_program::instruction::{AccountMeta, Instruction};
use tracing::debug;

use super::{instruction_data, InstructionBuilder};
use crate::config::ProgramIds;
use crate::constants::{MAX_SYMBOL_LEN, MAX_URI_LEN, MAX_USERNAME_LEN};
use crate::errors::{ReputationError, Result};
use crate::pda;

/// sighash("register_identity")
pub const REGISTER_IDENTITY_SELECTOR: [u8; 8] = [164, 118, 227, 177, 47, 176, 187, 248];

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RegisterIdentityArgs {
    pub username: String,
    pub symbol: String,
    pub uri: String,
}

impl RegisterIdentityArgs {
    /// Byte-length bounds enforced by the program, checked up front.
    pub fn validate(&self) -> Result<()> {
        for (field, value, max) in [
            ("username", &self.username, MAX_USERNAME_LEN),
            ("symbol", &self.symbol, MAX_SYMBOL_LEN),
            ("uri", &self.uri, MAX_URI_LEN),
        ] {
            if value.is_empty() {
                return Err(ReputationError::ArgumentEmpty { field });
            }
            if value.len() > max {
                return Err(ReputationError::ArgumentTooLong {
                    field,
                    len: value.len(),
                    max,
                });
            }
        }
        Ok(())
    }
}

/// Accounts for `register_identity`, in program order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterIdentityAccounts {
    pub identity_account: Pubkey,
    pub authority: Pubkey,
    pub system_program: Pubkey,
    /// Fresh mint keypair for the identity badge; must co-sign
    pub mint: Pubkey,
    pub token_account: Pubkey,
    pub metadata_account: Pubkey,
    pub master_edition_account: Pubkey,
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub token_metadata_program: Pubkey,
    pub rent: Pubkey,
}

impl RegisterIdentityAccounts {
    pub fn resolve(programs: &ProgramIds, authority: &Pubkey, mint: &Pubkey) -> Result<Self> {
        let (identity_account, _) = pda::identity_address(programs, authority)?;
        let token_account = pda::associated_token_address(programs, mint, authority)?;
        let (metadata_account, _) = pda::metadata_address(programs, mint)?;
        let (master_edition_account, _) = pda::master_edition_address(programs, mint)?;

        Ok(Self {
            identity_account,
            authority: *authority,
            system_program: programs.system,
            mint: *mint,
            token_account,
            metadata_account,
            master_edition_account,
            token_program: programs.token,
            associated_token_program: programs.associated_token,
            token_metadata_program: programs.token_metadata,
            rent: programs.rent_sysvar,
        })
    }
}

impl ToAccountMetas for RegisterIdentityAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.identity_account, false),
            AccountMeta::new(self.authority, true),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new(self.mint, true),
            AccountMeta::new(self.token_account, false),
            AccountMeta::new(self.metadata_account, false),
            AccountMeta::new(self.master_edition_account, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
            AccountMeta::new_readonly(self.token_metadata_program, false),
            AccountMeta::new_readonly(self.rent, false),
        ]
    }
}

impl InstructionBuilder {
    /// Register `authority`'s identity and mint its badge NFT into `mint`.
    pub fn register_identity(
        &self,
        authority: &Pubkey,
        username: &str,
        symbol: &str,
        uri: &str,
        mint: &Pubkey,
    ) -> Result<Instruction> {
        let args = RegisterIdentityArgs {
            username: username.to_string(),
            symbol: symbol.to_string(),
            uri: uri.to_string(),
        };
        args.validate()?;

        let accounts = RegisterIdentityAccounts::resolve(self.programs(), authority, mint)?;
        let data = instruction_data(REGISTER_IDENTITY_SELECTOR, &args)?;

        debug!(
            "register_identity: authority={}, identity={}, mint={}",
            authority, accounts.identity_account, mint
        );

        Ok(self.instruction(&accounts, data))
    }
}
