//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used throughout the server.

/// Type alias for a stored transaction.
///
/// # Fields (from `entity::eth_transaction::Model`)
/// - `transaction_hash` - Primary key, hash exactly as requested
/// - `transaction_status` - 1 for success, 0 for failure
/// - `block_hash` - Hash of the including block
/// - `block_number` - Number of the including block
/// - `from_address` - Checksummed sender address
/// - `to_address` - Checksummed recipient, absent for contract creation
/// - `contract_address` - Checksummed created contract, if any
/// - `logs_count` - Number of logs emitted
/// - `input` - `0x`-prefixed call data
/// - `value` - Transferred wei as a decimal string
pub type EthTransactionModel = entity::eth_transaction::Model;

/// Type alias for a user account.
pub type UserModel = entity::app_user::Model;
