//! Program-derived address derivation.
//!
//! All functions here are pure: the same program id and seeds always give
//! the same address and bump, so results may be shared or memoized freely.

use anchor_lang::prelude::Pubkey;
use solana_program::pubkey::{PubkeyError, MAX_SEEDS, MAX_SEED_LEN};
use tracing::debug;

use crate::config::ProgramIds;
use crate::constants::{SEED_EDITION, SEED_IDENTITY, SEED_METADATA, SEED_REPUTATION};
use crate::errors::{ReputationError, Result};

/// Find the canonical off-curve address for `seeds` under `program_id`.
///
/// Candidates append a single bump byte, starting at 255 and counting down
/// to 0; the first candidate that is not a valid ed25519 point wins.
pub fn derive_program_address(program_id: &Pubkey, seeds: &[&[u8]]) -> Result<(Pubkey, u8)> {
    // One slot is reserved for the bump seed.
    if seeds.len() >= MAX_SEEDS {
        return Err(ReputationError::InvalidSeeds(format!(
            "{} seeds given, at most {} allowed",
            seeds.len(),
            MAX_SEEDS - 1
        )));
    }
    if let Some(seed) = seeds.iter().find(|s| s.len() > MAX_SEED_LEN) {
        return Err(ReputationError::InvalidSeeds(format!(
            "seed of {} bytes exceeds {} bytes",
            seed.len(),
            MAX_SEED_LEN
        )));
    }

    for bump in (0..=u8::MAX).rev() {
        let bump_seed = [bump];
        let mut candidate_seeds = Vec::with_capacity(seeds.len() + 1);
        candidate_seeds.extend_from_slice(seeds);
        candidate_seeds.push(&bump_seed[..]);

        match Pubkey::create_program_address(&candidate_seeds, program_id) {
            Ok(address) => return Ok((address, bump)),
            // On the curve: try the next bump
            Err(PubkeyError::InvalidSeeds) => continue,
            Err(e) => return Err(ReputationError::InvalidSeeds(e.to_string())),
        }
    }

    Err(ReputationError::DerivationExhausted)
}

/// Identity PDA: ["identity", authority]
pub fn identity_address(programs: &ProgramIds, authority: &Pubkey) -> Result<(Pubkey, u8)> {
    let derived = derive_program_address(
        &programs.reputation,
        &[SEED_IDENTITY, authority.as_ref()],
    )?;
    debug!("identity PDA for {}: {}", authority, derived.0);
    Ok(derived)
}

/// Reputation PDA: ["reputation", agent]
pub fn reputation_address(programs: &ProgramIds, agent: &Pubkey) -> Result<(Pubkey, u8)> {
    let derived = derive_program_address(
        &programs.reputation,
        &[SEED_REPUTATION, agent.as_ref()],
    )?;
    debug!("reputation PDA for {}: {}", agent, derived.0);
    Ok(derived)
}

/// Token metadata PDA: ["metadata", metadata_program, mint]
pub fn metadata_address(programs: &ProgramIds, mint: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_program_address(
        &programs.token_metadata,
        &[SEED_METADATA, programs.token_metadata.as_ref(), mint.as_ref()],
    )
}

/// Master edition PDA: ["metadata", metadata_program, mint, "edition"]
pub fn master_edition_address(programs: &ProgramIds, mint: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_program_address(
        &programs.token_metadata,
        &[
            SEED_METADATA,
            programs.token_metadata.as_ref(),
            mint.as_ref(),
            SEED_EDITION,
        ],
    )
}

/// Associated token account of `owner` for `mint`.
///
/// Seeds are [owner, token_program, mint] under the associated token program.
pub fn associated_token_address(
    programs: &ProgramIds,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Result<Pubkey> {
    let (address, _bump) = derive_program_address(
        &programs.associated_token,
        &[owner.as_ref(), programs.token.as_ref(), mint.as_ref()],
    )?;
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        let program = Pubkey::new_unique();
        let agent = Pubkey::new_unique();
        let seeds: &[&[u8]] = &[b"reputation", agent.as_ref()];

        let first = derive_program_address(&program, seeds).unwrap();
        let second = derive_program_address(&program, seeds).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_matches_sdk_canonical_bump() {
        let program = Pubkey::new_unique();
        for _ in 0..16 {
            let owner = Pubkey::new_unique();
            let seeds: &[&[u8]] = &[b"identity", owner.as_ref()];
            let expected = Pubkey::find_program_address(seeds, &program);
            assert_eq!(derive_program_address(&program, seeds).unwrap(), expected);
        }
    }

    #[test]
    fn test_derived_address_is_off_curve() {
        let programs = ProgramIds::default();
        let (address, _) = reputation_address(&programs, &Pubkey::new_unique()).unwrap();
        assert!(!address.is_on_curve());
    }

    #[test]
    fn test_seed_order_matters() {
        let program = Pubkey::new_unique();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let ab = derive_program_address(&program, &[a.as_ref(), b.as_ref()]).unwrap();
        let ba = derive_program_address(&program, &[b.as_ref(), a.as_ref()]).unwrap();
        assert_ne!(ab.0, ba.0);
    }

    #[test]
    fn test_rejects_oversized_seed() {
        let program = Pubkey::new_unique();
        let long = [7u8; MAX_SEED_LEN + 1];
        let err = derive_program_address(&program, &[&long]).unwrap_err();
        assert!(matches!(err, ReputationError::InvalidSeeds(_)));
    }

    #[test]
    fn test_rejects_too_many_seeds() {
        let program = Pubkey::new_unique();
        let seeds: Vec<&[u8]> = (0..MAX_SEEDS).map(|_| &b"s"[..]).collect();
        let err = derive_program_address(&program, &seeds).unwrap_err();
        assert!(matches!(err, ReputationError::InvalidSeeds(_)));

        // Fifteen seeds leave room for the bump
        assert!(derive_program_address(&program, &seeds[..MAX_SEEDS - 1]).is_ok());
    }

    #[test]
    fn test_associated_token_matches_spl() {
        let programs = ProgramIds::default();
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        assert_eq!(
            associated_token_address(&programs, &mint, &owner).unwrap(),
            anchor_spl::associated_token::get_associated_token_address(&owner, &mint)
        );
    }

    #[test]
    fn test_metadata_and_edition_differ() {
        let programs = ProgramIds::default();
        let mint = Pubkey::new_unique();
        let (metadata, _) = metadata_address(&programs, &mint).unwrap();
        let (edition, _) = master_edition_address(&programs, &mint).unwrap();
        assert_ne!(metadata, edition);

        let expected = Pubkey::find_program_address(
            &[
                b"metadata",
                programs.token_metadata.as_ref(),
                mint.as_ref(),
                b"edition",
            ],
            &programs.token_metadata,
        );
        assert_eq!(master_edition_address(&programs, &mint).unwrap(), expected);
    }

    #[test]
    fn test_identity_and_reputation_slots_differ() {
        let programs = ProgramIds::default();
        let agent = Pubkey::new_unique();
        let (identity, _) = identity_address(&programs, &agent).unwrap();
        let (reputation, _) = reputation_address(&programs, &agent).unwrap();
        assert_ne!(identity, reputation);
    }
}
