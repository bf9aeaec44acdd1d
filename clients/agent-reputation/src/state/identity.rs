use anchor_lang::prelude::*;

use super::layout::{require_len, DISCRIMINATOR_LEN};
use crate::constants::{MAX_SYMBOL_LEN, MAX_URI_LEN, MAX_USERNAME_LEN};
use crate::errors::{ReputationError, Result};

/// An agent's registered identity, as stored by the program.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct IdentityRecord {
    /// The wallet that registered this identity
    pub authority: Pubkey,
    /// Display name (max 50 bytes)
    pub username: String,
    /// Badge symbol (max 10 bytes)
    pub symbol: String,
    /// Off-chain metadata URI (max 200 bytes)
    pub uri: String,
}

impl IdentityRecord {
    /// Smallest possible encoding: discriminator, authority, three empty strings.
    pub const MIN_SIZE: usize = DISCRIMINATOR_LEN + // discriminator
        32 +                                         // authority
        4 +                                          // username length prefix
        4 +                                          // symbol length prefix
        4;                                           // uri length prefix
    // Total: 52 bytes

    pub const MAX_SIZE: usize = Self::MIN_SIZE + MAX_USERNAME_LEN + MAX_SYMBOL_LEN + MAX_URI_LEN;
}

/// Decode raw identity account bytes, skipping the discriminator.
pub fn decode_identity(data: &[u8]) -> Result<IdentityRecord> {
    require_len(data, IdentityRecord::MIN_SIZE)?;

    let mut body = &data[DISCRIMINATOR_LEN..];
    let record = IdentityRecord::deserialize(&mut body)
        .map_err(|e| ReputationError::MalformedAccount(format!("identity: {e}")))?;

    for (field, len, max) in [
        ("username", record.username.len(), MAX_USERNAME_LEN),
        ("symbol", record.symbol.len(), MAX_SYMBOL_LEN),
        ("uri", record.uri.len(), MAX_URI_LEN),
    ] {
        if len > max {
            return Err(ReputationError::MalformedAccount(format!(
                "identity {field} is {len} bytes, maximum is {max}"
            )));
        }
    }

    Ok(record)
}
