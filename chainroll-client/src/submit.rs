use {
    crate::error::ClientError,
    solana_client::rpc_client::RpcClient,
    solana_sdk::{
        commitment_config::CommitmentConfig,
        instruction::Instruction,
        signature::{Keypair, Signature},
        signer::Signer,
        transaction::Transaction,
    },
    std::{
        thread,
        time::{Duration, Instant},
    },
};

pub const DEFAULT_CONFIRM_TIMEOUT: Duration = Duration::from_secs(45);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);
const MAX_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Assembles instructions into a single signed transaction, broadcasts it
/// once, and polls for confirmation under a hard deadline.
///
/// A rejected transaction is terminal and surfaced with the cluster's
/// reason. A deadline hit after broadcast is surfaced as
/// [`ClientError::ConfirmationTimeout`]; the transaction may still land, so
/// callers must not resubmit non-idempotent instructions on that path.
pub struct TransactionSubmitter<'a> {
    rpc: &'a RpcClient,
    commitment: CommitmentConfig,
    timeout: Duration,
    poll_interval: Duration,
}

impl<'a> TransactionSubmitter<'a> {
    pub fn new(rpc: &'a RpcClient) -> Self {
        Self {
            rpc,
            commitment: CommitmentConfig::confirmed(),
            timeout: DEFAULT_CONFIRM_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Submits one transaction built from `instructions` in list order,
    /// fee-paid and signed by `payer`.
    pub fn submit(
        &self,
        instructions: &[Instruction],
        payer: &Keypair,
    ) -> Result<Signature, ClientError> {
        let blockhash = self.rpc.get_latest_blockhash()?;
        let transaction = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            &[payer],
            blockhash,
        );
        let signature = self
            .rpc
            .send_transaction(&transaction)
            .map_err(classify_send_error)?;
        self.wait_for_confirmation(signature)
    }

    fn wait_for_confirmation(&self, signature: Signature) -> Result<Signature, ClientError> {
        let started = Instant::now();
        let mut interval = self.poll_interval;
        loop {
            match self
                .rpc
                .get_signature_status_with_commitment(&signature, self.commitment)?
            {
                Some(Ok(())) => return Ok(signature),
                Some(Err(err)) => return Err(ClientError::Rejected(err.to_string())),
                None => {}
            }
            if started.elapsed() >= self.timeout {
                return Err(ClientError::ConfirmationTimeout {
                    signature,
                    waited: started.elapsed(),
                });
            }
            thread::sleep(interval);
            interval = (interval * 2).min(MAX_POLL_INTERVAL);
        }
    }
}

// Preflight failures carry the would-be transaction error; everything else
// is a transport problem.
fn classify_send_error(error: solana_client::client_error::ClientError) -> ClientError {
    match error.get_transaction_error() {
        Some(transaction_error) => ClientError::Rejected(transaction_error.to_string()),
        None => ClientError::Rpc(error),
    }
}
