use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct TransactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TransactionRepository<'a, C> {
    /// Creates a new instance of [`TransactionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all stored transactions matching the provided hashes
    ///
    /// Hashes are matched exactly as stored; unknown hashes are simply absent from the result.
    pub async fn get_by_hashes(
        &self,
        transaction_hashes: &[String],
    ) -> Result<Vec<entity::eth_transaction::Model>, DbErr> {
        if transaction_hashes.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::EthTransaction::find()
            .filter(
                entity::eth_transaction::Column::TransactionHash
                    .is_in(transaction_hashes.iter().cloned()),
            )
            .all(self.db)
            .await
    }

    /// Persists a fetched transaction
    pub async fn create(
        &self,
        transaction: entity::eth_transaction::Model,
    ) -> Result<entity::eth_transaction::Model, DbErr> {
        let transaction = entity::eth_transaction::ActiveModel {
            transaction_hash: ActiveValue::Set(transaction.transaction_hash),
            transaction_status: ActiveValue::Set(transaction.transaction_status),
            block_hash: ActiveValue::Set(transaction.block_hash),
            block_number: ActiveValue::Set(transaction.block_number),
            from_address: ActiveValue::Set(transaction.from_address),
            to_address: ActiveValue::Set(transaction.to_address),
            contract_address: ActiveValue::Set(transaction.contract_address),
            logs_count: ActiveValue::Set(transaction.logs_count),
            input: ActiveValue::Set(transaction.input),
            value: ActiveValue::Set(transaction.value),
        };

        transaction.insert(self.db).await
    }

    /// Gets every stored transaction ordered by block number
    pub async fn get_all(&self) -> Result<Vec<entity::eth_transaction::Model>, DbErr> {
        entity::prelude::EthTransaction::find()
            .order_by_asc(entity::eth_transaction::Column::BlockNumber)
            .order_by_asc(entity::eth_transaction::Column::TransactionHash)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod get_by_hashes {
        use txfetch_test_utils::prelude::*;

        use crate::server::data::eth::transaction::TransactionRepository;

        /// Expect only stored transactions to be returned
        #[tokio::test]
        async fn returns_stored_subset() -> Result<(), TestError> {
            let mut test = test_setup_with_eth_tables!()?;
            test.eth().insert_mock_transaction("0x01").await?;
            test.eth().insert_mock_transaction("0x02").await?;

            let repo = TransactionRepository::new(&test.state.db);
            let hashes = vec!["0x01".to_string(), "0x03".to_string()];
            let result = repo.get_by_hashes(&hashes).await;

            assert!(result.is_ok());
            let transactions = result.unwrap();
            assert_eq!(transactions.len(), 1);
            assert_eq!(transactions[0].transaction_hash, "0x01");

            Ok(())
        }

        /// Expect Ok with empty vec without querying when no hashes are provided
        #[tokio::test]
        async fn returns_empty_for_empty_input() -> Result<(), TestError> {
            // No tables, so any query would fail
            let test = test_setup_with_tables!()?;

            let repo = TransactionRepository::new(&test.state.db);
            let result = repo.get_by_hashes(&[]).await;

            assert!(matches!(result, Ok(ref transactions) if transactions.is_empty()));

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let repo = TransactionRepository::new(&test.state.db);
            let result = repo.get_by_hashes(&["0x01".to_string()]).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod create {
        use txfetch_test_utils::prelude::*;

        use crate::server::data::eth::transaction::TransactionRepository;

        /// Expect the created record to match the provided model
        #[tokio::test]
        async fn creates_transaction() -> Result<(), TestError> {
            let test = test_setup_with_eth_tables!()?;
            let model = factory::mock_transaction_model("0x01");

            let repo = TransactionRepository::new(&test.state.db);
            let result = repo.create(model.clone()).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap(), model);

            Ok(())
        }

        /// Expect Error when a transaction with the same hash is already stored
        #[tokio::test]
        async fn fails_for_duplicate_hash() -> Result<(), TestError> {
            let mut test = test_setup_with_eth_tables!()?;
            test.eth().insert_mock_transaction("0x01").await?;

            let repo = TransactionRepository::new(&test.state.db);
            let result = repo.create(factory::mock_transaction_model("0x01")).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_all {
        use txfetch_test_utils::prelude::*;

        use crate::server::data::eth::transaction::TransactionRepository;

        /// Expect all records ordered by block number
        #[tokio::test]
        async fn returns_all_by_block_number() -> Result<(), TestError> {
            let mut test = test_setup_with_eth_tables!()?;
            let mut later = factory::mock_transaction_model("0x01");
            later.block_number += 1;
            test.eth().insert_transaction(later).await?;
            test.eth().insert_mock_transaction("0x02").await?;

            let repo = TransactionRepository::new(&test.state.db);
            let transactions = repo.get_all().await?;

            let hashes: Vec<&str> = transactions
                .iter()
                .map(|t| t.transaction_hash.as_str())
                .collect();
            assert_eq!(hashes, vec!["0x02", "0x01"]);

            Ok(())
        }
    }
}
