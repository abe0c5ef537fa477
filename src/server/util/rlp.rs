//! Decoding of RLP encoded transaction hash lists.
//!
//! Clients may submit a batch of transaction hashes as a single path segment holding the hex
//! encoding of an RLP list of strings.

use rlp::Rlp;

use crate::server::error::eth::EthError;

/// Decodes a hex encoded RLP list of strings into transaction hashes.
///
/// An optional `0x` prefix is accepted and an empty input decodes to an empty list.
///
/// # Returns
/// - `Ok(Vec<String>)` - The decoded strings in list order
/// - `Err(EthError::InvalidRlp)` - Invalid hex, an RLP item that is not a list, or a list item
///   that is not a UTF-8 string
pub fn decode_rlp_hash_list(rlp_hex: &str) -> Result<Vec<String>, EthError> {
    let digits = rlp_hex.strip_prefix("0x").unwrap_or(rlp_hex);
    if digits.is_empty() {
        return Ok(Vec::new());
    }

    let bytes = hex::decode(digits).map_err(|e| EthError::InvalidRlp(e.to_string()))?;

    Rlp::new(&bytes)
        .as_list::<String>()
        .map_err(|e| EthError::InvalidRlp(e.to_string()))
}
