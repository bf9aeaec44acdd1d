use anchor_lang::prelude::Pubkey;
use tracing::{info, warn};

use crate::capability::AccountFetcher;
use crate::config::ProgramIds;
use crate::errors::{ReputationError, Result};
use crate::pda;
use crate::state::{decode_identity, decode_reputation, IdentityRecord, ReputationSummary};

/// Reads program accounts through a caller-supplied [`AccountFetcher`].
///
/// Holds no cache: every call derives, fetches and decodes anew.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReputationReader {
    programs: ProgramIds,
}

impl ReputationReader {
    pub fn new(programs: ProgramIds) -> Self {
        Self { programs }
    }

    /// Fetch and decode `agent`'s reputation record.
    ///
    /// A missing account is `AccountNotInitialized`; fetch failures are
    /// `Transport` wrapping the fetcher's own error.
    pub async fn read_reputation<F: AccountFetcher>(
        &self,
        agent: &Pubkey,
        fetcher: &F,
    ) -> Result<ReputationSummary> {
        let (address, _) = pda::reputation_address(&self.programs, agent)?;
        let data = fetch(fetcher, &address).await?;
        let summary = decode_reputation(&data)?;

        info!(
            "Reputation for {}: {} transactions, volume {}, {} reviews",
            agent, summary.total_transactions, summary.total_volume, summary.total_reviews
        );

        Ok(summary)
    }

    /// Fetch and decode `authority`'s identity record.
    pub async fn read_identity<F: AccountFetcher>(
        &self,
        authority: &Pubkey,
        fetcher: &F,
    ) -> Result<IdentityRecord> {
        let (address, _) = pda::identity_address(&self.programs, authority)?;
        let data = fetch(fetcher, &address).await?;
        let record = decode_identity(&data)?;

        info!("Identity for {}: {} ({})", authority, record.username, record.symbol);

        Ok(record)
    }
}

async fn fetch<F: AccountFetcher>(fetcher: &F, address: &Pubkey) -> Result<Vec<u8>> {
    match fetcher.fetch_account_bytes(address).await {
        Ok(Some(data)) => Ok(data),
        Ok(None) => {
            warn!("Account {} is not initialized", address);
            Err(ReputationError::AccountNotInitialized(*address))
        }
        Err(e) => Err(ReputationError::Transport(Box::new(e))),
    }
}
