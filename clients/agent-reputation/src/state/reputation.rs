use anchor_lang::prelude::Pubkey;

use super::layout::{require_len, Field, DISCRIMINATOR_LEN};
use crate::amount::TokenAmount;
use crate::errors::Result;

/// Byte layout of the program's reputation account.
///
/// The discriminator is listed so the table covers every byte, but it is
/// never checked.
pub struct ReputationLayout;

impl ReputationLayout {
    pub const DISCRIMINATOR: Field<[u8; DISCRIMINATOR_LEN]> = Field::new("discriminator", 0);
    pub const AUTHORITY: Field<Pubkey> = Field::new("authority", Self::DISCRIMINATOR.end());
    pub const TOTAL_TRANSACTIONS: Field<u64> =
        Field::new("total_transactions", Self::AUTHORITY.end());
    pub const TOTAL_VOLUME: Field<u64> = Field::new("total_volume", Self::TOTAL_TRANSACTIONS.end());
    pub const TOTAL_REVIEWS: Field<u64> = Field::new("total_reviews", Self::TOTAL_VOLUME.end());
    pub const TOTAL_RATING_SCORE: Field<u64> =
        Field::new("total_rating_score", Self::TOTAL_REVIEWS.end());
    pub const BUMP: Field<u8> = Field::new("bump", Self::TOTAL_RATING_SCORE.end());

    pub const SIZE: usize = Self::BUMP.end();
    // Total: 73 bytes
}

/// Decoded view of a reputation account. Built fresh on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct ReputationSummary {
    /// The agent this record belongs to
    pub authority: Pubkey,
    pub total_transactions: u64,
    /// Cumulative payment volume in minor units
    pub total_volume: TokenAmount,
    pub total_reviews: u64,
    /// Sum of every rating received
    pub total_rating_score: u64,
    /// `total_rating_score / total_reviews`, or 0 with no reviews
    pub average_rating: f64,
}

impl ReputationSummary {
    /// Volume in whole tokens, for display.
    pub fn total_volume_major(&self) -> f64 {
        self.total_volume.to_major()
    }

    pub fn has_reviews(&self) -> bool {
        self.total_reviews > 0
    }
}

pub fn average_rating(total_rating_score: u64, total_reviews: u64) -> f64 {
    if total_reviews == 0 {
        return 0.0;
    }
    total_rating_score as f64 / total_reviews as f64
}

/// Decode raw reputation account bytes. Bytes past the layout are ignored.
pub fn decode_reputation(data: &[u8]) -> Result<ReputationSummary> {
    require_len(data, ReputationLayout::SIZE)?;

    let total_reviews = ReputationLayout::TOTAL_REVIEWS.read(data)?;
    let total_rating_score = ReputationLayout::TOTAL_RATING_SCORE.read(data)?;

    Ok(ReputationSummary {
        authority: ReputationLayout::AUTHORITY.read(data)?,
        total_transactions: ReputationLayout::TOTAL_TRANSACTIONS.read(data)?,
        total_volume: TokenAmount::from_minor_units(ReputationLayout::TOTAL_VOLUME.read(data)?),
        total_reviews,
        total_rating_score,
        average_rating: average_rating(total_rating_score, total_reviews),
    })
}
