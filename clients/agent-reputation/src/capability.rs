//! Network capabilities the core consumes but never implements.
//!
//! Implementations own transport, retries, timeouts, signing and
//! cancellation. The core only awaits them.

use std::future::Future;

use anchor_lang::prelude::Pubkey;
use solana_program::instruction::Instruction;

/// Single-account raw read.
pub trait AccountFetcher {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Raw account data, or `None` when no account exists at `address`.
    fn fetch_account_bytes(
        &self,
        address: &Pubkey,
    ) -> impl Future<Output = Result<Option<Vec<u8>>, Self::Error>> + Send;
}

/// Signs and broadcasts one instruction.
pub trait TransactionSubmitter {
    /// Whatever the submitter uses to name a landed transaction (usually a signature)
    type TransactionId;
    type Error: std::error::Error + Send + Sync + 'static;

    /// `signer` is the fee payer; any other required signers are the
    /// submitter's concern.
    fn submit(
        &self,
        instruction: Instruction,
        signer: &Pubkey,
    ) -> impl Future<Output = Result<Self::TransactionId, Self::Error>> + Send;
}
