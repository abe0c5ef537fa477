//! Transaction database fixture utilities.

use sea_orm::{ActiveModelTrait, IntoActiveModel};

use crate::{
    error::TestError,
    fixtures::eth::{factory, EthFixtures},
    model::EthTransactionModel,
};

impl<'a> EthFixtures<'a> {
    /// Insert a mock transaction record with standard test values.
    ///
    /// # Arguments
    /// - `transaction_hash` - Hash stored as the primary key
    ///
    /// # Returns
    /// - `Ok(EthTransactionModel)` - The inserted record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_mock_transaction(
        &mut self,
        transaction_hash: &str,
    ) -> Result<EthTransactionModel, TestError> {
        self.insert_transaction(factory::mock_transaction_model(transaction_hash))
            .await
    }

    /// Insert a transaction record as provided.
    pub async fn insert_transaction(
        &mut self,
        transaction: EthTransactionModel,
    ) -> Result<EthTransactionModel, TestError> {
        let transaction = transaction
            .into_active_model()
            .reset_all()
            .insert(&self.setup.state.db)
            .await?;

        Ok(transaction)
    }
}
