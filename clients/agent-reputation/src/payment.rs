use anchor_lang::prelude::Pubkey;
use tracing::info;

use crate::amount::TokenAmount;
use crate::capability::TransactionSubmitter;
use crate::errors::{ReputationError, Result};
use crate::instructions::InstructionBuilder;

/// Pay an agent and record the payment against its reputation in one
/// instruction.
///
/// The program applies the token transfer and the counter update together,
/// so there is no partial state to reconcile here: either `submit` succeeds
/// or its error is returned as-is. Nothing is retried.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentFlow {
    builder: InstructionBuilder,
}

impl PaymentFlow {
    pub fn new(builder: InstructionBuilder) -> Self {
        Self { builder }
    }

    /// `amount` is a decimal token quantity such as `"0.01"`.
    pub async fn pay<S: TransactionSubmitter>(
        &self,
        payer: &Pubkey,
        agent: &Pubkey,
        mint: &Pubkey,
        amount: &str,
        submitter: &S,
    ) -> Result<S::TransactionId> {
        let amount: TokenAmount = amount.parse()?;
        let instruction =
            self.builder
                .log_service_transaction(payer, agent, mint, amount.minor_units())?;

        info!("Paying {} tokens from {} to agent {}", amount, payer, agent);

        submitter
            .submit(instruction, payer)
            .await
            .map_err(|e| ReputationError::Submission(Box::new(e)))
    }
}
