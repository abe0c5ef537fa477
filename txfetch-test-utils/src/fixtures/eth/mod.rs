//! Ethereum transaction fixtures.
//!
//! Provides signed mock transactions with matching receipts, database insertion helpers and
//! mock JSON-RPC endpoints serving them.

use ethers::types::{Transaction, TransactionReceipt};

use crate::TestSetup;

pub mod data;
pub mod factory;
pub mod mockito;

impl TestSetup {
    pub fn eth<'a>(&'a mut self) -> EthFixtures<'a> {
        EthFixtures { setup: self }
    }
}

pub struct EthFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

/// A signed transaction as served by the mock node.
#[derive(Debug, Clone)]
pub struct MockTransaction {
    /// Lowercase `0x`-prefixed transaction hash
    pub hash: String,
    /// EIP-55 checksummed sender address
    pub from: String,
    pub transaction: Transaction,
    pub receipt: TransactionReceipt,
}
