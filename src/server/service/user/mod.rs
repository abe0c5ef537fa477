//! User service layer.
//!
//! Tracks which stored transactions each authenticated user has looked up.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        eth::transaction::TransactionRepository, user::user_transaction::UserTransactionRepository,
    },
    error::Error,
    model::db::EthTransactionModel,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records that the user looked up the provided transactions.
    ///
    /// Only hashes present in the database are recorded, so a returned record that failed to
    /// persist does not prevent the others from being linked. Failures are logged and otherwise
    /// ignored; a lookup never fails because its history could not be recorded.
    pub async fn add_viewed_transactions(&self, user_id: i32, transaction_hashes: &[String]) {
        if let Err(e) = self.link_stored(user_id, transaction_hashes).await {
            tracing::warn!(
                user_id = user_id,
                error = %e,
                "Failed to record viewed transactions"
            );
        }
    }

    async fn link_stored(&self, user_id: i32, transaction_hashes: &[String]) -> Result<u64, Error> {
        let stored: Vec<String> = TransactionRepository::new(self.db)
            .get_by_hashes(transaction_hashes)
            .await?
            .into_iter()
            .map(|t| t.transaction_hash)
            .collect();

        let linked = UserTransactionRepository::new(self.db)
            .add_many(user_id, &stored)
            .await?;

        Ok(linked)
    }

    /// Gets all transactions the user has looked up.
    pub async fn get_user_transactions(
        &self,
        user_id: i32,
    ) -> Result<Vec<EthTransactionModel>, Error> {
        let transactions = UserTransactionRepository::new(self.db)
            .get_transactions_by_user_id(user_id)
            .await?;

        Ok(transactions)
    }
}
