use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    fixtures::user::UserFixtures,
    model::{UserModel, UserTransactionModel},
};

impl<'a> UserFixtures<'a> {
    /// Insert a user account.
    ///
    /// # Arguments
    /// - `username` - Unique login name
    /// - `password_hash` - Stored password hash
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The inserted user
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_user(
        &mut self,
        username: &str,
        password_hash: &str,
    ) -> Result<UserModel, TestError> {
        let user = entity::app_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&self.setup.state.db)
        .await?;

        Ok(user)
    }

    /// Record that a user has viewed a stored transaction.
    pub async fn insert_user_transaction(
        &mut self,
        user_id: i32,
        transaction_hash: &str,
    ) -> Result<UserTransactionModel, TestError> {
        let user_transaction = entity::app_user_transaction::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            transaction_hash: ActiveValue::Set(transaction_hash.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
        .insert(&self.setup.state.db)
        .await?;

        Ok(user_transaction)
    }
}
