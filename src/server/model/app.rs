use chrono::Duration;
use ethers::providers::{Http, Provider};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::{DEFAULT_FETCH_CONCURRENCY, DEFAULT_JWT_DURATION_HOURS, DEFAULT_JWT_SECRET},
    eth::EthClient,
    service::auth::jwt::JwtAuth,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub eth_client: EthClient,
    pub jwt: JwtAuth,
    pub fetch_concurrency: usize,
}

/// Builds a state with default token and concurrency settings.
impl From<(DatabaseConnection, Provider<Http>)> for AppState {
    fn from((db, provider): (DatabaseConnection, Provider<Http>)) -> Self {
        Self {
            db,
            eth_client: EthClient::from(provider),
            jwt: JwtAuth::new(
                DEFAULT_JWT_SECRET,
                Duration::hours(DEFAULT_JWT_DURATION_HOURS),
            ),
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }
}
