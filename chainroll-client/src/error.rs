use {
    solana_client::client_error::ClientError as RpcClientError,
    solana_sdk::{
        pubkey::{Pubkey, PubkeyError},
        signature::Signature,
    },
    std::time::Duration,
    thiserror::Error,
};

#[derive(Error, Debug)]
pub enum ClientError {
    /// No deployment record for the program in the local store.
    #[error("program '{0}' not found in the deployment store, deploy it first")]
    ProgramNotDeployed(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to encode instruction data: {0}")]
    Encode(std::io::Error),

    #[error("failed to derive account address: {0}")]
    Derivation(#[from] PubkeyError),

    #[error("rpc request failed: {0}")]
    Rpc(#[from] RpcClientError),

    /// The cluster refused the transaction. Terminal, never retried.
    #[error("transaction rejected: {0}")]
    Rejected(String),

    /// The confirmation deadline passed without a definitive status. The
    /// transaction was already broadcast, so the outcome is unknown.
    #[error("transaction {signature} not confirmed after {waited:?}, outcome unknown")]
    ConfirmationTimeout {
        signature: Signature,
        waited: Duration,
    },

    #[error("account {0} does not exist")]
    AccountNotFound(Pubkey),

    /// The buffer is shorter than the layout requires. After a confirmed
    /// submission this points at a client/program layout mismatch.
    #[error("{what}: got {actual} bytes, layout requires {expected}")]
    Decode {
        what: String,
        expected: usize,
        actual: usize,
    },
}
