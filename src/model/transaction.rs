use serde::{Deserialize, Serialize};

/// An Ethereum transaction as returned by the transaction endpoints
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    /// Transaction hash exactly as requested
    pub transaction_hash: String,
    /// Receipt status, 1 for success and 0 for failure
    pub transaction_status: i32,
    pub block_hash: String,
    pub block_number: i64,
    /// Checksummed address recovered from the transaction signature
    pub from: String,
    pub to: Option<String>,
    /// Address of the contract created by this transaction, if any
    pub contract_address: Option<String>,
    pub logs_count: i32,
    /// Hex encoded call data, `0x` prefixed
    pub input: String,
    /// Transferred value in wei as a decimal string
    pub value: String,
}

/// Wrapper for transaction list responses
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TransactionsDto {
    pub transactions: Vec<TransactionDto>,
}

impl From<entity::eth_transaction::Model> for TransactionDto {
    fn from(model: entity::eth_transaction::Model) -> Self {
        Self {
            transaction_hash: model.transaction_hash,
            transaction_status: model.transaction_status,
            block_hash: model.block_hash,
            block_number: model.block_number,
            from: model.from_address,
            to: model.to_address,
            contract_address: model.contract_address,
            logs_count: model.logs_count,
            input: model.input,
            value: model.value,
        }
    }
}

impl From<Vec<entity::eth_transaction::Model>> for TransactionsDto {
    fn from(models: Vec<entity::eth_transaction::Model>) -> Self {
        Self {
            transactions: models.into_iter().map(TransactionDto::from).collect(),
        }
    }
}
