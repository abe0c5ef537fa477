//! Ethereum JSON-RPC node access.
//!
//! Wraps an `ethers` HTTP provider with the two per-transaction lookups the service depends on,
//! converting provider failures into the application's [`Error`] type.

use ethers::{
    providers::{Http, Middleware, Provider},
    types::{Transaction, TransactionReceipt, TxHash},
};

use crate::server::error::{config::ConfigError, Error};

/// Client for a single Ethereum JSON-RPC node.
///
/// Cheap to clone; clones share the underlying HTTP connection pool.
#[derive(Clone, Debug)]
pub struct EthClient {
    provider: Provider<Http>,
}

impl EthClient {
    /// Creates a client for the node at `url` without contacting it.
    pub fn new(url: &str) -> Result<Self, Error> {
        let provider = Provider::<Http>::try_from(url).map_err(|e| ConfigError::InvalidEnvValue {
            var: "ETH_NODE_URL".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { provider })
    }

    /// Returns the network ID reported by the node (`net_version`).
    pub async fn network_id(&self) -> Result<String, Error> {
        Ok(self.provider.get_net_version().await?)
    }

    /// Fetches the receipt for a transaction, `None` if the node does not know it.
    pub async fn transaction_receipt(
        &self,
        hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, Error> {
        Ok(self.provider.get_transaction_receipt(hash).await?)
    }

    /// Fetches a transaction body, `None` if the node does not know it.
    pub async fn transaction(&self, hash: TxHash) -> Result<Option<Transaction>, Error> {
        Ok(self.provider.get_transaction(hash).await?)
    }
}

impl From<Provider<Http>> for EthClient {
    fn from(provider: Provider<Http>) -> Self {
        Self { provider }
    }
}
