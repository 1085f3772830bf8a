use {
    chainroll_client::{instruction::RollMode, ClientError},
    clap::Args,
};

/// Options shared by every game binary.
#[derive(Args, Debug)]
pub struct ClusterOpts {
    /// RPC endpoint of the cluster.
    #[arg(short, long, default_value = "http://localhost:8899")]
    pub url: String,

    /// Path to the fee-payer keypair.
    #[arg(short, long, default_value = "keypair.json")]
    pub keypair: String,

    /// Directory holding deployment records.
    #[arg(short, long, default_value = "store")]
    pub store: String,
}

pub fn parse_mode(arg: &str) -> Result<RollMode, ClientError> {
    match arg {
        "1" => Ok(RollMode::Under),
        "2" => Ok(RollMode::Over),
        other => Err(ClientError::InvalidInput(format!(
            "mode must be 1 (roll under) or 2 (roll over), got '{other}'"
        ))),
    }
}

/// Parses a base-10 integer that must fit the layout's one-byte field.
pub fn parse_byte(field: &str, arg: &str) -> Result<u8, ClientError> {
    arg.parse().map_err(|_| {
        ClientError::InvalidInput(format!(
            "{field} must be an integer between 0 and 255, got '{arg}'"
        ))
    })
}

/// Parses a base-10 integer that must fit the layout's four-byte field.
pub fn parse_word(field: &str, arg: &str) -> Result<u32, ClientError> {
    arg.parse().map_err(|_| {
        ClientError::InvalidInput(format!(
            "{field} must be an integer between 0 and {}, got '{arg}'",
            u32::MAX
        ))
    })
}
