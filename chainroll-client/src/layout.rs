use {
    crate::error::ClientError,
    borsh::{BorshDeserialize, BorshSerialize},
};

/// Fixed-width wire layouts exchanged with the on-chain programs.
///
/// The programs read bare positional byte sequences with no length prefix
/// and no version field; multi-byte fields are little-endian. Borsh encodes
/// structs of `u8`/`u32` fields to exactly that shape, so implementors only
/// declare their width and get strict packing on top.
pub trait FixedLayout: BorshSerialize + BorshDeserialize {
    /// Exact encoded width in bytes.
    const LEN: usize;

    /// Name used in decode errors.
    const NAME: &'static str;

    fn pack(&self) -> Result<Vec<u8>, ClientError> {
        borsh::to_vec(self).map_err(ClientError::Encode)
    }

    /// Decodes the first `LEN` bytes of `data`. A buffer shorter than `LEN`
    /// is a hard failure, never zero-padded.
    fn unpack(data: &[u8]) -> Result<Self, ClientError> {
        if data.len() < Self::LEN {
            return Err(ClientError::Decode {
                what: Self::NAME.to_string(),
                expected: Self::LEN,
                actual: data.len(),
            });
        }
        Self::try_from_slice(&data[..Self::LEN]).map_err(|_| ClientError::Decode {
            what: Self::NAME.to_string(),
            expected: Self::LEN,
            actual: data.len(),
        })
    }
}
