//! Database model type aliases used by fixtures.

pub type EthTransactionModel = entity::eth_transaction::Model;

pub type UserModel = entity::app_user::Model;

pub type UserTransactionModel = entity::app_user_transaction::Model;
