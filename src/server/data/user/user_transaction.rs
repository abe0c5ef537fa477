use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

pub struct UserTransactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserTransactionRepository<'a, C> {
    /// Creates a new instance of [`UserTransactionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records that a user has viewed the provided transactions
    ///
    /// Transactions the user has already viewed are skipped. Every hash must refer to a stored
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of newly recorded views
    /// - `Err(DbErr)` - Unknown user or transaction, or a database failure
    pub async fn add_many(&self, user_id: i32, transaction_hashes: &[String]) -> Result<u64, DbErr> {
        if transaction_hashes.is_empty() {
            return Ok(0);
        }

        let now = Utc::now().naive_utc();
        let entries = transaction_hashes
            .iter()
            .map(|hash| entity::app_user_transaction::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                transaction_hash: ActiveValue::Set(hash.clone()),
                created_at: ActiveValue::Set(now),
            });

        entity::prelude::AppUserTransaction::insert_many(entries)
            .on_conflict(
                OnConflict::columns([
                    entity::app_user_transaction::Column::UserId,
                    entity::app_user_transaction::Column::TransactionHash,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }

    /// Gets all transactions a user has viewed, oldest view first
    pub async fn get_transactions_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::eth_transaction::Model>, DbErr> {
        entity::prelude::EthTransaction::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::eth_transaction::Relation::AppUserTransaction.def(),
            )
            .filter(entity::app_user_transaction::Column::UserId.eq(user_id))
            .order_by_asc(entity::app_user_transaction::Column::CreatedAt)
            .order_by_asc(entity::eth_transaction::Column::TransactionHash)
            .all(self.db)
            .await
    }
}
