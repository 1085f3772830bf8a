use {
    crate::{error::ClientError, layout::FixedLayout},
    borsh::{BorshDeserialize, BorshSerialize},
    solana_client::rpc_client::RpcClient,
    solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey},
};

/// House bank of the dice program, a single little-endian u32.
#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq)]
pub struct BankState {
    pub money: u32,
}

impl FixedLayout for BankState {
    const LEN: usize = 4;
    const NAME: &'static str = "bank account data";
}

/// Prize pool of the vote program.
#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq)]
pub struct PoolState {
    pub pool: u32,
}

impl FixedLayout for PoolState {
    const LEN: usize = 4;
    const NAME: &'static str = "prize-pool account data";
}

/// A voter's balance, booked on their seeded check account.
#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq)]
pub struct CheckState {
    pub balance: u32,
}

impl FixedLayout for CheckState {
    const LEN: usize = 4;
    const NAME: &'static str = "check account data";
}

/// Reads program account state back from the ledger.
///
/// Every read fetches the latest confirmed bytes; nothing is cached, since
/// any landed transaction invalidates a snapshot.
pub struct StateReader<'a> {
    rpc: &'a RpcClient,
    commitment: CommitmentConfig,
}

impl<'a> StateReader<'a> {
    pub fn new(rpc: &'a RpcClient) -> Self {
        Self {
            rpc,
            commitment: CommitmentConfig::confirmed(),
        }
    }

    pub fn read_bank(&self, account: &Pubkey) -> Result<BankState, ClientError> {
        self.read(account)
    }

    pub fn read_pool(&self, account: &Pubkey) -> Result<PoolState, ClientError> {
        self.read(account)
    }

    pub fn read_check(&self, account: &Pubkey) -> Result<CheckState, ClientError> {
        self.read(account)
    }

    fn read<T: FixedLayout>(&self, account: &Pubkey) -> Result<T, ClientError> {
        let fetched = self
            .rpc
            .get_account_with_commitment(account, self.commitment)?
            .value
            .ok_or(ClientError::AccountNotFound(*account))?;
        T::unpack(&fetched.data)
    }
}
