//! Per-transaction lookup against the Ethereum node.
//!
//! A transaction record is assembled from two independent node queries: the receipt (status,
//! block placement, created contract and log count) and the transaction body (sender, recipient,
//! call data and value). Both queries always run to completion concurrently and their results
//! are merged by the awaiting task, so no state is shared between them.

use ethers::types::{Transaction, TransactionReceipt, TxHash};

use crate::server::{
    error::{eth::EthError, Error},
    eth::EthClient,
    model::db::EthTransactionModel,
    util::eth::{format_address, format_hash, format_payload, normalize_transaction_hash},
};

/// Fields of a transaction record sourced from its receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptFields {
    pub status: i32,
    pub block_hash: String,
    pub block_number: i64,
    pub contract_address: Option<String>,
    pub logs_count: i32,
}

/// Fields of a transaction record sourced from the transaction body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreFields {
    pub from: String,
    pub to: Option<String>,
    pub input: String,
    pub value: String,
}

impl ReceiptFields {
    /// Extracts receipt fields, failing for receipts not yet included in a block.
    ///
    /// A zero contract address is reported by some nodes for plain transfers and is treated as
    /// no contract having been created.
    pub fn from_receipt(transaction_hash: &str, receipt: TransactionReceipt) -> Result<Self, EthError> {
        let (block_hash, block_number) = match (receipt.block_hash, receipt.block_number) {
            (Some(block_hash), Some(block_number)) => (block_hash, block_number),
            _ => return Err(EthError::PendingTransaction(transaction_hash.to_string())),
        };

        Ok(Self {
            status: receipt.status.map(|s| s.as_u64() as i32).unwrap_or(0),
            block_hash: format_hash(&block_hash),
            block_number: block_number.as_u64() as i64,
            contract_address: receipt
                .contract_address
                .filter(|address| !address.is_zero())
                .map(|address| format_address(&address)),
            logs_count: receipt.logs.len() as i32,
        })
    }
}

impl CoreFields {
    /// Extracts transaction body fields, recovering the sender from the signature.
    pub fn from_transaction(transaction_hash: &str, transaction: Transaction) -> Result<Self, EthError> {
        let from = transaction
            .recover_from()
            .map_err(|source| EthError::SenderRecovery {
                hash: transaction_hash.to_string(),
                source,
            })?;

        Ok(Self {
            from: format_address(&from),
            to: transaction.to.as_ref().map(format_address),
            input: format_payload(&transaction.input),
            value: transaction.value.to_string(),
        })
    }
}

/// Merges both halves of a transaction record.
pub fn merge_fields(
    transaction_hash: String,
    receipt: ReceiptFields,
    core: CoreFields,
) -> EthTransactionModel {
    EthTransactionModel {
        transaction_hash,
        transaction_status: receipt.status,
        block_hash: receipt.block_hash,
        block_number: receipt.block_number,
        from_address: core.from,
        to_address: core.to,
        contract_address: receipt.contract_address,
        logs_count: receipt.logs_count,
        input: core.input,
        value: core.value,
    }
}

pub struct TransactionFetcher<'a> {
    eth_client: &'a EthClient,
}

impl<'a> TransactionFetcher<'a> {
    /// Creates a new instance of [`TransactionFetcher`]
    pub fn new(eth_client: &'a EthClient) -> Self {
        Self { eth_client }
    }

    /// Fetches a complete transaction record from the node.
    ///
    /// Issues the receipt and transaction body lookups concurrently and waits for both. If
    /// either lookup fails the whole fetch fails with the first error (receipt before body) and
    /// nothing is returned for this hash.
    ///
    /// # Arguments
    /// - `transaction_hash` - Hash as supplied by the caller, stored verbatim on the record
    ///
    /// # Returns
    /// - `Ok(EthTransactionModel)` - Fully populated record
    /// - `Err(Error::EthError)` - Unknown or pending transaction, or unrecoverable signature
    /// - `Err(Error::ProviderError)` - The node request failed
    pub async fn fetch(&self, transaction_hash: &str) -> Result<EthTransactionModel, Error> {
        let hash = normalize_transaction_hash(transaction_hash);

        let (receipt, core) = tokio::join!(
            self.fetch_receipt(transaction_hash, hash),
            self.fetch_core_data(transaction_hash, hash)
        );

        Ok(merge_fields(transaction_hash.to_string(), receipt?, core?))
    }

    async fn fetch_receipt(&self, transaction_hash: &str, hash: TxHash) -> Result<ReceiptFields, Error> {
        let receipt = self
            .eth_client
            .transaction_receipt(hash)
            .await?
            .ok_or_else(|| EthError::ReceiptNotFound(transaction_hash.to_string()))?;

        tracing::debug!(transaction_hash = %transaction_hash, "Fetched transaction receipt");

        Ok(ReceiptFields::from_receipt(transaction_hash, receipt)?)
    }

    async fn fetch_core_data(&self, transaction_hash: &str, hash: TxHash) -> Result<CoreFields, Error> {
        let transaction = self
            .eth_client
            .transaction(hash)
            .await?
            .ok_or_else(|| EthError::TransactionNotFound(transaction_hash.to_string()))?;

        tracing::debug!(transaction_hash = %transaction_hash, "Fetched transaction body");

        Ok(CoreFields::from_transaction(transaction_hash, transaction)?)
    }
}
