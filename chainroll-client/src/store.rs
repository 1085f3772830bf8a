use {
    crate::error::ClientError,
    serde::Deserialize,
    solana_sdk::{pubkey::Pubkey, signature::Keypair},
    std::{fs, path::Path, str::FromStr},
};

/// A deployed program and its primary data account.
///
/// Loaded once per invocation from the deployment record the deploy scripts
/// write, then passed by value into every builder that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramRef {
    pub program_id: Pubkey,
    pub account_id: Pubkey,
}

// Key names as the deploy scripts write them.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreEntry {
    program_id: String,
    account_id: String,
}

impl ProgramRef {
    /// Loads the record `<store_dir>/<name>.json`. A missing record means
    /// the program was never deployed to this cluster.
    pub fn load(store_dir: &Path, name: &str) -> Result<Self, ClientError> {
        let path = store_dir.join(format!("{name}.json"));
        let raw = fs::read_to_string(&path)
            .map_err(|_| ClientError::ProgramNotDeployed(name.to_string()))?;
        let entry: StoreEntry = serde_json::from_str(&raw).map_err(|e| {
            ClientError::Config(format!(
                "malformed deployment record {}: {e}",
                path.display()
            ))
        })?;
        Ok(Self {
            program_id: parse_pubkey(&entry.program_id, "programId", &path)?,
            account_id: parse_pubkey(&entry.account_id, "accountId", &path)?,
        })
    }
}

fn parse_pubkey(value: &str, field: &str, path: &Path) -> Result<Pubkey, ClientError> {
    Pubkey::from_str(value).map_err(|_| {
        ClientError::Config(format!(
            "{field} in {} is not a valid public key",
            path.display()
        ))
    })
}

/// Reads a keypair stored as a JSON array of bytes, the format the
/// deployment tooling and `solana-keygen` write.
pub fn load_keypair(path: &Path) -> Result<Keypair, ClientError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ClientError::Config(format!("failed to read keypair {}: {e}", path.display())))?;
    let bytes: Vec<u8> = serde_json::from_str(&raw)
        .map_err(|e| ClientError::Config(format!("malformed keypair {}: {e}", path.display())))?;
    Keypair::from_bytes(&bytes)
        .map_err(|e| ClientError::Config(format!("invalid keypair {}: {e}", path.display())))
}
