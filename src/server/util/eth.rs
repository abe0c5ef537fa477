//! Ethereum-specific formatting and parsing helpers.
//!
//! Transaction hashes arrive from clients as free-form strings and addresses leave the service
//! as checksummed strings; these helpers keep both conversions in one place.

use ethers::{
    types::{Address, TxHash},
    utils::to_checksum,
};

/// Converts a caller-supplied hash string into a 32-byte hash for node queries.
///
/// Never fails: the optional `0x` prefix is dropped, an odd digit count is padded with a
/// leading zero, decoding stops at the first non-hex pair, and the bytes are right-aligned
/// (left-padded with zeros or truncated to the last 32 bytes). Malformed input therefore
/// reaches the node and fails there.
pub fn normalize_transaction_hash(value: &str) -> TxHash {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    let digits = if digits.len() % 2 == 1 {
        format!("0{}", digits)
    } else {
        digits.to_string()
    };

    let bytes: Vec<u8> = digits
        .as_bytes()
        .chunks(2)
        .map_while(|pair| {
            let pair = std::str::from_utf8(pair).ok()?;
            u8::from_str_radix(pair, 16).ok()
        })
        .collect();

    let len = TxHash::len_bytes();
    let tail = &bytes[bytes.len().saturating_sub(len)..];
    let mut hash = TxHash::zero();
    hash.as_bytes_mut()[len - tail.len()..].copy_from_slice(tail);

    hash
}

/// Formats an address using its EIP-55 mixed-case checksum encoding.
pub fn format_address(address: &Address) -> String {
    to_checksum(address, None)
}

/// Formats a 32-byte hash as `0x` followed by 64 lowercase hex digits.
pub fn format_hash(hash: &TxHash) -> String {
    format!("{:#x}", hash)
}

/// Encodes a payload as `0x` followed by lowercase hex, `0x` alone when empty.
pub fn format_payload(payload: &[u8]) -> String {
    format!("0x{}", hex::encode(payload))
}

#[cfg(test)]
mod tests {
    use ethers::types::{Address, TxHash};

    use super::*;

    const HASH: &str = "0x9b2f6a3c9c5c7f8b6b0b4f1d61c2a5d1b39a1f6b7f2e1d0c9b8a7f6e5d4c3b2a";

    /// Expect prefixed and bare hashes to parse to the same value
    #[test]
    fn normalizes_prefixed_and_bare_hashes() {
        let prefixed = normalize_transaction_hash(HASH);
        let bare = normalize_transaction_hash(&HASH[2..]);
        let upper = normalize_transaction_hash(&format!("0X{}", HASH[2..].to_uppercase()));

        assert_eq!(prefixed, bare);
        assert_eq!(prefixed, upper);
        assert_eq!(format_hash(&prefixed), HASH);
    }

    /// Expect short hashes to be left-padded and long ones to keep their last 32 bytes
    #[test]
    fn right_aligns_short_and_long_hashes() {
        assert_eq!(
            format_hash(&normalize_transaction_hash("0xabc")),
            format!("0x{}0abc", "0".repeat(60))
        );
        assert_eq!(
            normalize_transaction_hash(&format!("0xffff{}", &HASH[2..])),
            normalize_transaction_hash(HASH)
        );
    }

    /// Expect non-hex input to normalize to the zero hash instead of failing
    #[test]
    fn normalizes_garbage_to_zero_hash() {
        assert_eq!(normalize_transaction_hash(""), TxHash::zero());
        assert_eq!(normalize_transaction_hash("0x"), TxHash::zero());
        assert_eq!(normalize_transaction_hash("hash1"), TxHash::zero());
        assert_eq!(
            format_hash(&normalize_transaction_hash("0x12zz")),
            format!("0x{}12", "0".repeat(62))
        );
    }

    /// Expect EIP-55 checksum casing
    #[test]
    fn formats_checksummed_address() {
        let address: Address = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();

        assert_eq!(
            format_address(&address),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
    }

    /// Expect payloads to be 0x-prefixed lowercase hex
    #[test]
    fn formats_payload() {
        assert_eq!(format_payload(&[]), "0x");
        assert_eq!(format_payload(&[0xde, 0xad, 0xBE, 0xef]), "0xdeadbeef");
        assert_eq!(format_hash(&TxHash::zero()), format!("0x{}", "0".repeat(64)));
    }
}
