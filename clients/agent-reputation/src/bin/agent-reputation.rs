//! Offline companion for the agent reputation program.
//!
//! Builds unsigned instructions as JSON envelopes and decodes account data
//! copied from an explorer or RPC response. Nothing here talks to the
//! network.
//!
//! # Usage
//!
//! ```bash
//! agent-reputation build-payment \
//!   --payer <PUBKEY> --agent <PUBKEY> --amount 0.01
//!
//! agent-reputation decode --data <BASE64>
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use agent_reputation::constants::USDC_MINT_DEVNET;
use agent_reputation::state::decode_reputation;
use agent_reputation::{pda, InstructionBuilder, InstructionEnvelope, ProgramIds, TokenAmount};
use anchor_lang::prelude::Pubkey;
use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as B64, Engine as _};
use clap::{Parser, Subcommand};
use solana_program::instruction::Instruction;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "agent-reputation")]
#[command(about = "Build and inspect agent reputation program instructions")]
struct Cli {
    /// JSON file overriding program addresses (base58 strings)
    #[arg(long, env = "AGENT_REPUTATION_PROGRAMS", global = true)]
    programs: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the identity and reputation PDAs of a wallet
    Pda {
        #[arg(long)]
        wallet: String,
    },
    /// Build a register_identity instruction
    BuildRegister {
        #[arg(long)]
        authority: String,
        /// Public key of the freshly generated badge mint
        #[arg(long)]
        mint: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        uri: String,
    },
    /// Build an initialize_reputation instruction
    BuildInit {
        #[arg(long)]
        authority: String,
    },
    /// Build a log_service_transaction instruction
    BuildPayment {
        #[arg(long)]
        payer: String,
        #[arg(long)]
        agent: String,
        /// Token mint (defaults to devnet USDC)
        #[arg(long)]
        mint: Option<String>,
        /// Decimal amount, e.g. 0.01
        #[arg(long)]
        amount: String,
    },
    /// Decode base64 reputation account data
    Decode {
        #[arg(long)]
        data: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let programs = load_programs(cli.programs.as_ref())?;
    let builder = InstructionBuilder::new(programs);

    match cli.cmd {
        Command::Pda { wallet } => {
            let wallet = parse_pubkey(&wallet, "wallet")?;
            let (identity, identity_bump) = pda::identity_address(&programs, &wallet)?;
            let (reputation, reputation_bump) = pda::reputation_address(&programs, &wallet)?;
            print_json(&serde_json::json!({
                "identity": { "address": identity.to_string(), "bump": identity_bump },
                "reputation": { "address": reputation.to_string(), "bump": reputation_bump },
            }))?;
        }
        Command::BuildRegister {
            authority,
            mint,
            username,
            symbol,
            uri,
        } => {
            let authority = parse_pubkey(&authority, "authority")?;
            let mint = parse_pubkey(&mint, "mint")?;
            let ix = builder.register_identity(&authority, &username, &symbol, &uri, &mint)?;
            print_instruction(&ix)?;
        }
        Command::BuildInit { authority } => {
            let authority = parse_pubkey(&authority, "authority")?;
            print_instruction(&builder.initialize_reputation(&authority)?)?;
        }
        Command::BuildPayment {
            payer,
            agent,
            mint,
            amount,
        } => {
            let payer = parse_pubkey(&payer, "payer")?;
            let agent = parse_pubkey(&agent, "agent")?;
            let mint = match mint {
                Some(mint) => parse_pubkey(&mint, "mint")?,
                None => USDC_MINT_DEVNET,
            };
            let amount: TokenAmount = amount.parse()?;

            info!("Building payment of {} from {} to {}", amount, payer, agent);
            let ix = builder.log_service_transaction(&payer, &agent, &mint, amount.minor_units())?;
            print_instruction(&ix)?;
        }
        Command::Decode { data } => {
            let raw = B64.decode(data.trim()).context("Account data is not valid base64")?;
            let summary = decode_reputation(&raw)?;
            print_json(&serde_json::json!({
                "authority": summary.authority.to_string(),
                "totalTransactions": summary.total_transactions,
                "totalVolume": summary.total_volume.to_string(),
                "totalVolumeMinorUnits": summary.total_volume.minor_units(),
                "totalReviews": summary.total_reviews,
                "totalRatingScore": summary.total_rating_score,
                "averageRating": summary.average_rating,
            }))?;
        }
    }

    Ok(())
}

fn load_programs(path: Option<&PathBuf>) -> Result<ProgramIds> {
    let Some(path) = path else {
        return Ok(ProgramIds::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read program table {}", path.display()))?;
    let programs = ProgramIds::from_json(&json)
        .with_context(|| format!("Invalid program table {}", path.display()))?;
    info!("Reputation program: {}", programs.reputation);
    Ok(programs)
}

fn parse_pubkey(s: &str, what: &str) -> Result<Pubkey> {
    Pubkey::from_str(s).with_context(|| format!("Invalid {} pubkey: {}", what, s))
}

fn print_instruction(ix: &Instruction) -> Result<()> {
    print_json(&InstructionEnvelope::from(ix))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
