use {
    crate::{error::ClientError, submit::TransactionSubmitter},
    solana_client::rpc_client::RpcClient,
    solana_program::system_instruction,
    solana_sdk::{
        commitment_config::CommitmentConfig,
        pubkey::Pubkey,
        signature::Keypair,
        signer::Signer,
    },
};

/// Seed for a voter's check account. The vote program re-derives the
/// address with this seed and rejects anything else.
pub const CHECK_SEED: &str = "checkvote";

/// Derives the seeded account address for `(base, seed, program_id)`.
///
/// Pure and deterministic: the same triple yields the same address on every
/// call, in every process, with no ledger round-trip. That is what makes
/// [`AccountProvisioner::ensure_account`] safe to run on every invocation.
pub fn derive_check_address(
    base: &Pubkey,
    seed: &str,
    program_id: &Pubkey,
) -> Result<Pubkey, ClientError> {
    Ok(Pubkey::create_with_seed(base, seed, program_id)?)
}

/// Result of an [`AccountProvisioner::ensure_account`] run.
#[derive(Debug, Clone, Copy)]
pub struct ProvisionReceipt {
    pub address: Pubkey,
    /// Whether the account already existed on the ledger.
    pub existed: bool,
    /// Rent-exemption lamports deposited; zero when the account existed.
    pub rent_paid: u64,
}

/// Creates seeded program accounts on first use.
///
/// Because the address derivation is deterministic, this is an idempotent
/// upsert: a rerun after a successful creation finds the account and writes
/// nothing. If a creation times out, the account may or may not exist; the
/// next run's existence check is the recovery path, so no signature is
/// tracked here.
pub struct AccountProvisioner<'a> {
    rpc: &'a RpcClient,
    commitment: CommitmentConfig,
}

impl<'a> AccountProvisioner<'a> {
    pub fn new(rpc: &'a RpcClient) -> Self {
        Self {
            rpc,
            commitment: CommitmentConfig::confirmed(),
        }
    }

    /// Ensures the account derived from `(payer, seed, program_id)` exists
    /// with `space` bytes of zeroed program-owned data, funding the
    /// rent-exemption deposit from `payer` when it has to create it.
    pub fn ensure_account(
        &self,
        payer: &Keypair,
        seed: &str,
        program_id: &Pubkey,
        space: u64,
    ) -> Result<ProvisionReceipt, ClientError> {
        let address = derive_check_address(&payer.pubkey(), seed, program_id)?;

        let existing = self
            .rpc
            .get_account_with_commitment(&address, self.commitment)?
            .value;
        if existing.is_some() {
            return Ok(ProvisionReceipt {
                address,
                existed: true,
                rent_paid: 0,
            });
        }

        let rent = self
            .rpc
            .get_minimum_balance_for_rent_exemption(space as usize)?;
        let create = system_instruction::create_account_with_seed(
            &payer.pubkey(),
            &address,
            &payer.pubkey(),
            seed,
            rent,
            space,
            program_id,
        );
        TransactionSubmitter::new(self.rpc).submit(&[create], payer)?;

        Ok(ProvisionReceipt {
            address,
            existed: false,
            rent_paid: rent,
        })
    }
}
