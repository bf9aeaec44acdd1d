use anchor_lang::prelude::Pubkey;

/// Boxed error produced by an external capability, kept as-is for downcasting.
pub type CapabilityError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum ReputationError {
    #[error("{field} is {len} bytes, maximum is {max}")]
    ArgumentTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
    #[error("{field} must not be empty")]
    ArgumentEmpty { field: &'static str },
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid seeds: {0}")]
    InvalidSeeds(String),
    #[error("No bump in 0..=255 yields an off-curve address")]
    DerivationExhausted,
    #[error("Account data is {len} bytes, layout needs at least {min}")]
    LayoutTooShort { len: usize, min: usize },
    #[error("Malformed account data: {0}")]
    MalformedAccount(String),
    #[error("Account {0} is not initialized")]
    AccountNotInitialized(Pubkey),
    #[error("Transport error: {0}")]
    Transport(#[source] CapabilityError),
    #[error("Submission error: {0}")]
    Submission(#[source] CapabilityError),
    #[error("Malformed instruction envelope: {0}")]
    MalformedEnvelope(String),
    #[error("Serialization failed: {0}")]
    Serialization(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReputationError>;
