use ethers::providers::{Http, Provider};
use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
    pub provider: Provider<Http>,
}

/// Test environment with an in-memory SQLite database and a mock Ethereum JSON-RPC node.
///
/// The provider in [`TestAppState`] points at the mockito server, so every node request made
/// during a test must be matched by an endpoint created through [`TestSetup::eth`].
pub struct TestSetup {
    pub server: ServerGuard,
    pub state: TestAppState,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    /// Convert TestAppState into any type that can be constructed from its fields.
    /// This allows conversion to AppState without creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, Provider<Http>)>,
    {
        T::from((self.state.db.clone(), self.state.provider.clone()))
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let provider = Provider::<Http>::try_from(mock_server.url().as_str())
            .map_err(|e| TestError::InvalidNodeUrl(e.to_string()))?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server: mock_server,
            state: TestAppState { db, provider },
            mocks: Vec::new(),
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Calls `assert()` on all mocks stored on the setup to verify they were invoked the
    /// expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates a setup with the transaction table.
#[macro_export]
macro_rules! test_setup_with_eth_tables {
    () => {{
        $crate::test_setup_with_tables!(entity::prelude::EthTransaction)
    }};
}

/// Creates a setup with the transaction, user and viewed transaction tables.
#[macro_export]
macro_rules! test_setup_with_user_tables {
    () => {{
        $crate::test_setup_with_tables!(
            entity::prelude::EthTransaction,
            entity::prelude::AppUser,
            entity::prelude::AppUserTransaction,
        )
    }};
}
