//! End-to-end flows against an in-memory stand-in for the cluster.
//!
//! `FakeCluster` plays both capabilities: it serves account bytes and, on
//! submit, applies `initialize_reputation` and `log_service_transaction` to
//! its reputation records the way the deployed program does.

use std::collections::HashMap;
use std::sync::Mutex;

use agent_reputation::instructions::{
    INITIALIZE_REPUTATION_SELECTOR, LOG_SERVICE_TRANSACTION_SELECTOR,
};
use agent_reputation::state::ReputationLayout;
use agent_reputation::{
    pda, AccountFetcher, InstructionBuilder, PaymentFlow, ProgramIds, ReputationError,
    ReputationReader, TransactionSubmitter,
};
use anchor_lang::prelude::Pubkey;
use solana_program::instruction::Instruction;

#[derive(Debug, thiserror::Error)]
enum ClusterError {
    #[error("rpc unavailable")]
    Unavailable,
    #[error("custom program error: account not initialized")]
    ProgramRejected,
}

#[derive(Default)]
struct FakeCluster {
    accounts: Mutex<HashMap<Pubkey, Vec<u8>>>,
    signatures: Mutex<u64>,
}

impl FakeCluster {
    fn apply(&self, ix: &Instruction) -> Result<(), ClusterError> {
        let mut accounts = self.accounts.lock().unwrap();
        let selector = &ix.data[..8];

        if selector == INITIALIZE_REPUTATION_SELECTOR {
            let reputation = ix.accounts[0].pubkey;
            let authority = ix.accounts[1].pubkey;
            let mut data = vec![0u8; ReputationLayout::SIZE];
            data[8..40].copy_from_slice(authority.as_ref());
            accounts.insert(reputation, data);
            return Ok(());
        }

        if selector == LOG_SERVICE_TRANSACTION_SELECTOR {
            let amount = u64::from_le_bytes(ix.data[8..16].try_into().unwrap());
            let reputation = ix.accounts[2].pubkey;
            let data = accounts
                .get_mut(&reputation)
                .ok_or(ClusterError::ProgramRejected)?;
            add_u64(data, ReputationLayout::TOTAL_TRANSACTIONS.offset, 1);
            add_u64(data, ReputationLayout::TOTAL_VOLUME.offset, amount);
            return Ok(());
        }

        Err(ClusterError::ProgramRejected)
    }

    fn review(&self, agent: &Pubkey, rating: u64) {
        let (reputation, _) = pda::reputation_address(&ProgramIds::default(), agent).unwrap();
        let mut accounts = self.accounts.lock().unwrap();
        let data = accounts.get_mut(&reputation).unwrap();
        add_u64(data, ReputationLayout::TOTAL_REVIEWS.offset, 1);
        add_u64(data, ReputationLayout::TOTAL_RATING_SCORE.offset, rating);
    }
}

fn add_u64(data: &mut [u8], offset: usize, delta: u64) {
    let current = u64::from_le_bytes(data[offset..offset + 8].try_into().unwrap());
    data[offset..offset + 8].copy_from_slice(&(current + delta).to_le_bytes());
}

impl AccountFetcher for FakeCluster {
    type Error = ClusterError;

    async fn fetch_account_bytes(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, ClusterError> {
        Ok(self.accounts.lock().unwrap().get(address).cloned())
    }
}

impl TransactionSubmitter for FakeCluster {
    type TransactionId = u64;
    type Error = ClusterError;

    async fn submit(&self, instruction: Instruction, _signer: &Pubkey) -> Result<u64, ClusterError> {
        self.apply(&instruction)?;
        let mut count = self.signatures.lock().unwrap();
        *count += 1;
        Ok(*count)
    }
}

struct Unreachable;

impl AccountFetcher for Unreachable {
    type Error = ClusterError;

    async fn fetch_account_bytes(&self, _address: &Pubkey) -> Result<Option<Vec<u8>>, ClusterError> {
        Err(ClusterError::Unavailable)
    }
}

#[tokio::test]
async fn test_initialize_pay_and_read_back() {
    let cluster = FakeCluster::default();
    let builder = InstructionBuilder::default();
    let reader = ReputationReader::default();
    let flow = PaymentFlow::new(builder);

    let agent = Pubkey::new_unique();
    let payer = Pubkey::new_unique();
    let mint = Pubkey::new_unique();

    // Agent has no record until it initializes one
    let err = reader.read_reputation(&agent, &cluster).await.unwrap_err();
    assert!(matches!(err, ReputationError::AccountNotInitialized(_)));

    let init = builder.initialize_reputation(&agent).unwrap();
    cluster.submit(init, &agent).await.unwrap();

    let fresh = reader.read_reputation(&agent, &cluster).await.unwrap();
    assert_eq!(fresh.authority, agent);
    assert_eq!(fresh.total_transactions, 0);
    assert_eq!(fresh.average_rating, 0.0);

    flow.pay(&payer, &agent, &mint, "10", &cluster).await.unwrap();
    flow.pay(&payer, &agent, &mint, "4.99", &cluster).await.unwrap();
    let tx = flow.pay(&payer, &agent, &mint, "0.01", &cluster).await.unwrap();
    assert_eq!(tx, 4);

    cluster.review(&agent, 5);
    cluster.review(&agent, 4);

    let summary = reader.read_reputation(&agent, &cluster).await.unwrap();
    assert_eq!(summary.total_transactions, 3);
    assert_eq!(summary.total_volume.minor_units(), 15_000_000);
    assert_eq!(summary.total_volume_major(), 15.0);
    assert_eq!(summary.total_reviews, 2);
    assert_eq!(summary.total_rating_score, 9);
    assert_eq!(summary.average_rating, 4.5);
}

#[tokio::test]
async fn test_payment_to_uninitialized_agent_surfaces_program_error() {
    let cluster = FakeCluster::default();
    let err = PaymentFlow::default()
        .pay(
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            "0.01",
            &cluster,
        )
        .await
        .unwrap_err();

    match err {
        ReputationError::Submission(source) => assert!(matches!(
            source.downcast_ref::<ClusterError>(),
            Some(ClusterError::ProgramRejected)
        )),
        other => panic!("expected Submission, got {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_failure_is_not_reported_as_missing_account() {
    let err = ReputationReader::default()
        .read_reputation(&Pubkey::new_unique(), &Unreachable)
        .await
        .unwrap_err();
    assert!(matches!(err, ReputationError::Transport(_)));
}

#[tokio::test]
async fn test_reads_run_concurrently() {
    let cluster = FakeCluster::default();
    let builder = InstructionBuilder::default();
    let first = Pubkey::new_unique();
    let second = Pubkey::new_unique();
    for agent in [&first, &second] {
        cluster
            .submit(builder.initialize_reputation(agent).unwrap(), agent)
            .await
            .unwrap();
    }

    let reader = ReputationReader::default();
    let (a, b) = tokio::join!(
        reader.read_reputation(&first, &cluster),
        reader.read_reputation(&second, &cluster)
    );
    assert_eq!(a.unwrap().authority, first);
    assert_eq!(b.unwrap().authority, second);
}

#[test]
fn test_derivation_from_many_threads_agrees() {
    let programs = ProgramIds::default();
    let agent = Pubkey::new_unique();
    let expected = pda::reputation_address(&programs, &agent).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| pda::reputation_address(&programs, &agent).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
