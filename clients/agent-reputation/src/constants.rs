//! Fixed identifiers of the reputation program and the programs it calls.
//!
//! Byte-level compatibility with the deployed program depends on these
//! values, so they are literals rather than configuration. [`ProgramIds`]
//! collects them into one table.
//!
//! [`ProgramIds`]: crate::config::ProgramIds

use anchor_lang::prelude::*;
use solana_program::pubkey;

// ============================================================================
// Program IDs
// ============================================================================

/// Agent reputation program (same value as [`crate::ID`])
pub const REPUTATION_PROGRAM_ID: Pubkey = pubkey!("8EavuS1VJ6GXEwqdgm65mofBQSULf1nXY2pmvhbNyS7k");

/// SPL Token program
pub const TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// SPL Associated Token Account program
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey =
    pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

/// Metaplex Token Metadata program
pub const TOKEN_METADATA_PROGRAM_ID: Pubkey =
    pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

/// Native system program
pub const SYSTEM_PROGRAM_ID: Pubkey = pubkey!("11111111111111111111111111111111");

/// Rent sysvar
pub const RENT_SYSVAR_ID: Pubkey = pubkey!("SysvarRent111111111111111111111111111111111");

/// USDC mint on devnet
pub const USDC_MINT_DEVNET: Pubkey = pubkey!("4zMMC9srt5Ri5X14GAgXhaHii3GnPAEERYPJgZJDncDU");

// ============================================================================
// PDA Seeds
// ============================================================================

/// PDA: ["identity", authority]
pub const SEED_IDENTITY: &[u8] = b"identity";

/// PDA: ["reputation", agent]
pub const SEED_REPUTATION: &[u8] = b"reputation";

/// PDA (metadata program): ["metadata", metadata_program, mint]
pub const SEED_METADATA: &[u8] = b"metadata";

/// PDA (metadata program): ["metadata", metadata_program, mint, "edition"]
pub const SEED_EDITION: &[u8] = b"edition";

// ============================================================================
// Argument Limits
// ============================================================================

pub const MAX_USERNAME_LEN: usize = 50;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_URI_LEN: usize = 200;

// ============================================================================
// Token Units
// ============================================================================

/// Decimal places of the payment token (USDC)
pub const TOKEN_DECIMALS: u32 = 6;

/// Minor units in one whole token
pub const MINOR_UNITS_PER_TOKEN: u64 = 10u64.pow(TOKEN_DECIMALS);
