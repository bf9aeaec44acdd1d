//! Program address table.
//!
//! Every builder, reader and flow receives one [`ProgramIds`] at construction
//! instead of reaching for globals. The default table holds the deployed
//! addresses from [`crate::constants`]; a JSON document can override
//! individual entries (e.g. a localnet deployment of the reputation program).

use std::fmt;

use anchor_lang::prelude::Pubkey;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Logical name of a program the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramKind {
    Reputation,
    Token,
    AssociatedToken,
    TokenMetadata,
    System,
    RentSysvar,
}

impl ProgramKind {
    pub const ALL: [ProgramKind; 6] = [
        ProgramKind::Reputation,
        ProgramKind::Token,
        ProgramKind::AssociatedToken,
        ProgramKind::TokenMetadata,
        ProgramKind::System,
        ProgramKind::RentSysvar,
    ];
}

impl fmt::Display for ProgramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProgramKind::Reputation => "reputation",
            ProgramKind::Token => "token",
            ProgramKind::AssociatedToken => "associated_token",
            ProgramKind::TokenMetadata => "token_metadata",
            ProgramKind::System => "system",
            ProgramKind::RentSysvar => "rent_sysvar",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramIds {
    #[serde(with = "base58")]
    pub reputation: Pubkey,
    #[serde(with = "base58")]
    pub token: Pubkey,
    #[serde(with = "base58")]
    pub associated_token: Pubkey,
    #[serde(with = "base58")]
    pub token_metadata: Pubkey,
    #[serde(with = "base58")]
    pub system: Pubkey,
    #[serde(with = "base58")]
    pub rent_sysvar: Pubkey,
}

impl Default for ProgramIds {
    fn default() -> Self {
        Self {
            reputation: REPUTATION_PROGRAM_ID,
            token: TOKEN_PROGRAM_ID,
            associated_token: ASSOCIATED_TOKEN_PROGRAM_ID,
            token_metadata: TOKEN_METADATA_PROGRAM_ID,
            system: SYSTEM_PROGRAM_ID,
            rent_sysvar: RENT_SYSVAR_ID,
        }
    }
}

impl ProgramIds {
    /// Parse a JSON table; missing entries keep their deployed defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn get(&self, kind: ProgramKind) -> Pubkey {
        match kind {
            ProgramKind::Reputation => self.reputation,
            ProgramKind::Token => self.token,
            ProgramKind::AssociatedToken => self.associated_token,
            ProgramKind::TokenMetadata => self.token_metadata,
            ProgramKind::System => self.system,
            ProgramKind::RentSysvar => self.rent_sysvar,
        }
    }
}

/// Pubkeys as base58 strings rather than serde's default byte array.
mod base58 {
    use std::str::FromStr;

    use anchor_lang::prelude::Pubkey;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(key)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(|e| D::Error::custom(format!("invalid pubkey {s}: {e}")))
    }
}
