use {
    anyhow::Result,
    chainroll_client::{
        error::ClientError,
        instruction::{self, CheckedBet, DiceRoll, RollMode},
        layout::FixedLayout,
        provision::{AccountProvisioner, CHECK_SEED},
        state::{CheckState, StateReader},
        store::{self, ProgramRef},
        submit::TransactionSubmitter,
    },
    solana_client::rpc_client::RpcClient,
    solana_sdk::{commitment_config::CommitmentConfig, signer::Signer},
    std::{path::Path, time::Duration},
};

// Expects a running cluster with both programs deployed, `keypair.json`
// holding a funded payer, and deployment records under `store/`.
const RPC_URL: &str = "http://localhost:8899";
const STORE_DIR: &str = "store";

fn rpc_client() -> RpcClient {
    RpcClient::new_with_commitment(RPC_URL.to_string(), CommitmentConfig::confirmed())
}

#[test]
#[ignore = "needs a cluster, a funded keypair.json, and deployed programs"]
fn dice_flow() -> Result<()> {
    let rpc = rpc_client();
    let payer = store::load_keypair(Path::new("keypair.json"))?;
    let program = ProgramRef::load(Path::new(STORE_DIR), "simplest")?;

    let balance_before = rpc.get_balance(&payer.pubkey())?;
    println!("payer {} balance {}", payer.pubkey(), balance_before);

    let roll = DiceRoll::new(RollMode::Under, 50, 10);
    let signature = TransactionSubmitter::new(&rpc)
        .submit(&[instruction::roll(&program, &roll)?], &payer)?;
    println!("roll confirmed: {signature}");

    let balance_after = rpc.get_balance(&payer.pubkey())?;
    println!(
        "fee paid: {} lamports",
        balance_before.saturating_sub(balance_after)
    );

    let bank = StateReader::new(&rpc).read_bank(&program.account_id)?;
    println!("bank money: {}", bank.money);
    Ok(())
}

#[test]
#[ignore = "needs a cluster, a funded keypair.json, and deployed programs"]
fn vote_flow_provisions_the_check_account_exactly_once() -> Result<()> {
    let rpc = rpc_client();
    let payer = store::load_keypair(Path::new("keypair.json"))?;
    let program = ProgramRef::load(Path::new(STORE_DIR), "rejectdups")?;

    let provisioner = AccountProvisioner::new(&rpc);
    let first = provisioner.ensure_account(
        &payer,
        CHECK_SEED,
        &program.program_id,
        CheckState::LEN as u64,
    )?;
    println!(
        "check account {} existed={} rent_paid={}",
        first.address, first.existed, first.rent_paid
    );

    // Rerun finds the account and performs no ledger write.
    let second = provisioner.ensure_account(
        &payer,
        CHECK_SEED,
        &program.program_id,
        CheckState::LEN as u64,
    )?;
    assert_eq!(second.address, first.address);
    assert!(second.existed);
    assert_eq!(second.rent_paid, 0);

    let bet = CheckedBet::new(RollMode::Under, 50, 10);
    let vote = instruction::vote(&program, &first.address, &payer.pubkey(), &bet)?;
    let signature = TransactionSubmitter::new(&rpc).submit(&[vote], &payer)?;
    println!("vote confirmed: {signature}");

    let reader = StateReader::new(&rpc);
    let pool = reader.read_pool(&program.account_id)?;
    let check = reader.read_check(&first.address)?;
    println!("prize pool: {} / balance: {}", pool.pool, check.balance);
    Ok(())
}

#[test]
#[ignore = "needs a cluster and a funded keypair.json"]
fn zero_deadline_surfaces_a_timeout_not_a_rejection() -> Result<()> {
    let rpc = rpc_client();
    let payer = store::load_keypair(Path::new("keypair.json"))?;
    let program = ProgramRef::load(Path::new(STORE_DIR), "simplest")?;

    let roll = DiceRoll::new(RollMode::Under, 50, 1);
    let outcome = TransactionSubmitter::new(&rpc)
        .with_timeout(Duration::ZERO)
        .submit(&[instruction::roll(&program, &roll)?], &payer);

    // Broadcast happened, confirmation could not be observed in time: the
    // outcome is unknown, which is neither Confirmed nor Rejected.
    match outcome {
        Err(ClientError::ConfirmationTimeout { signature, .. }) => {
            println!("timed out as expected: {signature}");
            Ok(())
        }
        other => panic!("expected a confirmation timeout, got {other:?}"),
    }
}
