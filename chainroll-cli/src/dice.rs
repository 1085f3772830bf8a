use {
    chainroll_cli::{parse_byte, parse_mode, ClusterOpts},
    chainroll_client::{
        instruction::{self, DiceRoll, RollMode},
        state::StateReader,
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
#[command(name = "dice-cli")]
#[command(about = "Roll the dice against the deployed dice program.", long_about = None)]
struct Args {
    /// Roll mode: 1 rolls under the threshold, 2 rolls over it.
    mode: String,

    /// Threshold the roll is compared against (0-255).
    threshold: String,

    /// Amount to wager (0-255).
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
    // Inputs are checked before anything touches the filesystem or the
    // network.
    let mode = parse_mode(&args.mode)?;
    let threshold = parse_byte("threshold", &args.threshold)?;
    let bet = parse_byte("bet", &args.bet)?;
    let roll = DiceRoll::new(mode, threshold, bet);

    let payer = store::load_keypair(Path::new(&args.cluster.keypair))?;
    let program = ProgramRef::load(Path::new(&args.cluster.store), "simplest")?;
    let rpc =
        RpcClient::new_with_commitment(args.cluster.url.clone(), CommitmentConfig::confirmed());

    println!("-----");
    println!(
        "program: {} bank: {}",
        program.program_id, program.account_id
    );
    match mode {
        RollMode::Under => println!("roll under {threshold}, betting {bet}"),
        RollMode::Over => println!("roll over {threshold}, betting {bet}"),
    }

    let balance_before = rpc.get_balance(&payer.pubkey())?;

    let signature =
        TransactionSubmitter::new(&rpc).submit(&[instruction::roll(&program, &roll)?], &payer)?;
    println!("confirmed: {signature}");

    let balance_after = rpc.get_balance(&payer.pubkey())?;
    println!(
        "cost of dicing: {} lamports",
        balance_before.saturating_sub(balance_after)
    );

    let bank = StateReader::new(&rpc).read_bank(&program.account_id)?;
    println!("current money: {}", bank.money);
    println!("-----");
    Ok(())
}
