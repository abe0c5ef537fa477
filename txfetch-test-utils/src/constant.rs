//! Test constants for signing mock transactions.
//!
//! These values are not real credentials. The private key is the well-known first development
//! account key and must never hold funds.

/// Private key used to sign mock transactions.
pub static TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Chain ID embedded in mock transaction signatures.
pub static TEST_CHAIN_ID: u64 = 11155111;

/// Block number mock receipts are included in.
pub static TEST_BLOCK_NUMBER: u64 = 5_702_816;
