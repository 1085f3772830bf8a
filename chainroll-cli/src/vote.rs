use {
    chainroll_cli::{parse_byte, parse_mode, parse_word, ClusterOpts},
    chainroll_client::{
        instruction::{self, CheckedBet, RollMode},
        layout::FixedLayout,
        provision::{AccountProvisioner, CHECK_SEED},
        state::{CheckState, StateReader},
        store::{self, ProgramRef},
        submit::TransactionSubmitter,
        ClientError,
    },
    clap::Parser,
    solana_client::rpc_client::RpcClient,
    solana_sdk::{commitment_config::CommitmentConfig, signer::Signer},
    std::path::Path,
};

#[derive(Parser)]
#[command(name = "vote-cli")]
#[command(
    about = "Place a checked bet against the deployed vote program. Creates \
             your seeded check account on first use.",
    long_about = None
)]
struct Args {
    /// Roll mode: 1 rolls under the threshold, 2 rolls over it.
    mode: String,

    /// Threshold the roll is compared against (0-255).
    threshold: String,

    /// Amount to wager (0-4294967295).
    bet: String,

    #[command(flatten)]
    cluster: ClusterOpts,
}

fn main() {
    match execute(Args::parse()) {
        Ok(()) => std::process::exit(exitcode::OK),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn execute(args: Args) -> Result<(), ClientError> {
    let mode = parse_mode(&args.mode)?;
    let threshold = parse_byte("threshold", &args.threshold)?;
    let bet = parse_word("bet", &args.bet)?;
    let payload = CheckedBet::new(mode, threshold, bet);

    let payer = store::load_keypair(Path::new(&args.cluster.keypair))?;
    let program = ProgramRef::load(Path::new(&args.cluster.store), "rejectdups")?;
    let rpc =
        RpcClient::new_with_commitment(args.cluster.url.clone(), CommitmentConfig::confirmed());

    println!("-----");
    println!(
        "program: {} pool: {}",
        program.program_id, program.account_id
    );
    println!("payload: {}", hex::encode(payload.pack()?));
    match mode {
        RollMode::Under => println!("roll under {threshold}, betting {bet}"),
        RollMode::Over => println!("roll over {threshold}, betting {bet}"),
    }

    let balance_before = rpc.get_balance(&payer.pubkey())?;
    let reader = StateReader::new(&rpc);

    // The check account books this voter's balance; create it on first use.
    let receipt = AccountProvisioner::new(&rpc).ensure_account(
        &payer,
        CHECK_SEED,
        &program.program_id,
        CheckState::LEN as u64,
    )?;
    if receipt.existed {
        let check = reader.read_check(&receipt.address)?;
        println!(
            "check account {} balance {}",
            receipt.address, check.balance
        );
    } else {
        println!(
            "created check account {} for {} lamports rent",
            receipt.address, receipt.rent_paid
        );
    }

    let vote = instruction::vote(&program, &receipt.address, &payer.pubkey(), &payload)?;
    let signature = TransactionSubmitter::new(&rpc).submit(&[vote], &payer)?;
    println!("confirmed: {signature}");

    let balance_after = rpc.get_balance(&payer.pubkey())?;
    println!(
        "cost of voting: {} lamports",
        balance_before.saturating_sub(balance_after)
    );

    let pool = reader.read_pool(&program.account_id)?;
    println!("prize pool: {}", pool.pool);
    let check = reader.read_check(&receipt.address)?;
    println!("your balance: {}", check.balance);
    println!("-----");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(mode: &str, threshold: &str, bet: &str) -> Args {
        Args {
            mode: mode.to_string(),
            threshold: threshold.to_string(),
            bet: bet.to_string(),
            cluster: ClusterOpts {
                url: "http://localhost:8899".to_string(),
                keypair: "/nonexistent/keypair.json".to_string(),
                store: "/nonexistent".to_string(),
            },
        }
    }

    #[test]
    fn invalid_mode_fails_before_any_io() {
        assert!(matches!(
            execute(args("0", "50", "10")).unwrap_err(),
            ClientError::InvalidInput(_)
        ));
    }

    #[test]
    fn bet_larger_than_u32_fails_before_any_io() {
        assert!(matches!(
            execute(args("2", "50", "4294967296")).unwrap_err(),
            ClientError::InvalidInput(_)
        ));
    }
}
