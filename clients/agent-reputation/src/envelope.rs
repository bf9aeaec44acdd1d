//! JSON form of an unsigned instruction, for handing a built instruction to
//! a wallet or another process:
//!
//! ```json
//! {
//!   "programId": "8EavuS1VJ6GXEwqdgm65mofBQSULf1nXY2pmvhbNyS7k",
//!   "keys": [{ "pubkey": "...", "isSigner": true, "isWritable": true }],
//!   "instruction": "<base64 instruction data>"
//! }
//! ```

use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use base64::{engine::general_purpose::STANDARD as B64, Engine as _};
use serde::{Deserialize, Serialize};
use solana_program::instruction::{AccountMeta, Instruction};

use crate::errors::ReputationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionEnvelope {
    pub program_id: String,
    pub keys: Vec<EnvelopeKey>,
    /// Base64 instruction data
    pub instruction: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeKey {
    pub pubkey: String,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl From<&Instruction> for InstructionEnvelope {
    fn from(ix: &Instruction) -> Self {
        Self {
            program_id: ix.program_id.to_string(),
            keys: ix
                .accounts
                .iter()
                .map(|meta| EnvelopeKey {
                    pubkey: meta.pubkey.to_string(),
                    is_signer: meta.is_signer,
                    is_writable: meta.is_writable,
                })
                .collect(),
            instruction: B64.encode(&ix.data),
        }
    }
}

impl TryFrom<&InstructionEnvelope> for Instruction {
    type Error = ReputationError;

    fn try_from(envelope: &InstructionEnvelope) -> Result<Self, Self::Error> {
        let accounts = envelope
            .keys
            .iter()
            .map(|key| {
                Ok(AccountMeta {
                    pubkey: parse_pubkey(&key.pubkey)?,
                    is_signer: key.is_signer,
                    is_writable: key.is_writable,
                })
            })
            .collect::<Result<Vec<_>, ReputationError>>()?;

        let data = B64
            .decode(&envelope.instruction)
            .map_err(|e| ReputationError::MalformedEnvelope(format!("instruction data: {e}")))?;

        Ok(Instruction {
            program_id: parse_pubkey(&envelope.program_id)?,
            accounts,
            data,
        })
    }
}

fn parse_pubkey(s: &str) -> Result<Pubkey, ReputationError> {
    Pubkey::from_str(s).map_err(|e| ReputationError::MalformedEnvelope(format!("{s}: {e}")))
}
