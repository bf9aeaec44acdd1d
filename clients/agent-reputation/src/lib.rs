//! Client core for the agent reputation program.
//!
//! Derives program addresses, assembles the program's instructions and
//! decodes its accounts. Network access is left to the caller through the
//! traits in [`capability`].

use anchor_lang::prelude::*;

pub mod amount;
pub mod capability;
pub mod config;
pub mod constants;
pub mod envelope;
pub mod errors;
pub mod instructions;
pub mod payment;
pub mod pda;
pub mod reader;
pub mod state;

pub use amount::TokenAmount;
pub use capability::{AccountFetcher, TransactionSubmitter};
pub use config::{ProgramIds, ProgramKind};
pub use envelope::InstructionEnvelope;
pub use errors::{ReputationError, Result};
pub use instructions::InstructionBuilder;
pub use payment::PaymentFlow;
pub use reader::ReputationReader;
pub use state::{IdentityRecord, ReputationSummary};

declare_id!("8EavuS1VJ6GXEwqdgm65mofBQSULf1nXY2pmvhbNyS7k");
