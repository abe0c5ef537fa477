//! Batch transaction resolution.
//!
//! Resolves a list of transaction hashes into records by serving stored records from the
//! database and fetching the remainder from the Ethereum node. Freshly fetched records are
//! persisted so later lookups are served locally.

use std::collections::{HashMap, HashSet};

use futures::future::join_all;
use sea_orm::DatabaseConnection;
use tokio::sync::Semaphore;

use crate::server::{
    config::DEFAULT_FETCH_CONCURRENCY,
    data::eth::transaction::TransactionRepository,
    error::{eth::EthError, Error},
    eth::EthClient,
    model::db::EthTransactionModel,
    service::eth::fetch::TransactionFetcher,
};

pub struct TransactionService<'a> {
    db: &'a DatabaseConnection,
    eth_client: &'a EthClient,
    fetch_concurrency: usize,
}

impl<'a> TransactionService<'a> {
    /// Creates a new instance of [`TransactionService`]
    pub fn new(db: &'a DatabaseConnection, eth_client: &'a EthClient) -> Self {
        Self {
            db,
            eth_client,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }

    /// Limits how many node fetches run at once, values below 1 are raised to 1.
    pub fn with_fetch_concurrency(mut self, fetch_concurrency: usize) -> Self {
        self.fetch_concurrency = fetch_concurrency.max(1);
        self
    }

    /// Resolves transaction hashes into transaction records.
    ///
    /// Duplicate hashes are resolved once. Hashes already stored are served from the database;
    /// the rest are fetched from the node concurrently and persisted. Hashes that cannot be
    /// fetched are logged and left out of the result, so the result may be shorter than the
    /// input. A database that cannot be queried is treated as holding no records, and a record
    /// that cannot be persisted is still returned.
    ///
    /// # Arguments
    /// - `transaction_hashes` - Hashes to resolve, compared exactly as given
    ///
    /// # Returns
    /// - `Ok(Vec<EthTransactionModel>)` - Stored records followed by fetched records, each in
    ///   input order
    /// - `Err(Error::EthError(EthError::EmptyHashList))` - No hashes were provided
    pub async fn get_transactions_by_hashes(
        &self,
        transaction_hashes: Vec<String>,
    ) -> Result<Vec<EthTransactionModel>, Error> {
        if transaction_hashes.is_empty() {
            return Err(EthError::EmptyHashList.into());
        }

        let unique_hashes = dedup_hashes(transaction_hashes);

        let mut transactions = self.find_stored(&unique_hashes).await;

        let stored_hashes: HashSet<&str> = transactions
            .iter()
            .map(|t| t.transaction_hash.as_str())
            .collect();
        let missing_hashes: Vec<String> = unique_hashes
            .iter()
            .filter(|hash| !stored_hashes.contains(hash.as_str()))
            .cloned()
            .collect();

        // Return stored records in the order they were requested
        let positions: HashMap<&str, usize> = unique_hashes
            .iter()
            .enumerate()
            .map(|(i, hash)| (hash.as_str(), i))
            .collect();
        transactions.sort_by_key(|t| positions.get(t.transaction_hash.as_str()).copied());

        if missing_hashes.is_empty() {
            return Ok(transactions);
        }

        let fetched = self.fetch_missing(missing_hashes).await;
        self.store_fetched(&fetched).await;

        transactions.extend(fetched);

        Ok(transactions)
    }

    /// Gets every stored transaction.
    pub async fn get_all_transactions(&self) -> Result<Vec<EthTransactionModel>, Error> {
        let transactions = TransactionRepository::new(self.db).get_all().await?;

        Ok(transactions)
    }

    async fn find_stored(&self, transaction_hashes: &[String]) -> Vec<EthTransactionModel> {
        match TransactionRepository::new(self.db)
            .get_by_hashes(transaction_hashes)
            .await
        {
            Ok(transactions) => transactions,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Failed to query stored transactions; fetching all from node"
                );
                Vec::new()
            }
        }
    }

    /// Fetches transactions from the node, dropping hashes that fail.
    ///
    /// At most `fetch_concurrency` fetches are in flight at once. Results keep the order of
    /// `transaction_hashes`.
    pub(super) async fn fetch_missing(
        &self,
        transaction_hashes: Vec<String>,
    ) -> Vec<EthTransactionModel> {
        let semaphore = Semaphore::new(self.fetch_concurrency);
        let fetcher = TransactionFetcher::new(self.eth_client);

        let futures = transaction_hashes.iter().map(|hash| {
            let semaphore = &semaphore;
            let fetcher = &fetcher;
            async move {
                let Ok(_permit) = semaphore.acquire().await else {
                    let closed = Error::InternalError("fetch semaphore closed".to_string());
                    return (hash, Err(closed));
                };

                (hash, fetcher.fetch(hash).await)
            }
        });

        join_all(futures)
            .await
            .into_iter()
            .filter_map(|(hash, result)| match result {
                Ok(transaction) => Some(transaction),
                Err(e) => {
                    tracing::warn!(
                        transaction_hash = %hash,
                        error = %e,
                        "Failed to fetch transaction; skipping"
                    );
                    None
                }
            })
            .collect()
    }

    /// Persists fetched transactions, logging records that fail to save.
    pub(super) async fn store_fetched(&self, transactions: &[EthTransactionModel]) {
        let repo = TransactionRepository::new(self.db);

        for transaction in transactions {
            if let Err(e) = repo.create(transaction.clone()).await {
                tracing::warn!(
                    transaction_hash = %transaction.transaction_hash,
                    error = %e,
                    "Failed to persist fetched transaction"
                );
            }
        }
    }
}

/// Removes duplicate hashes, keeping the first occurrence of each.
fn dedup_hashes(transaction_hashes: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();

    transaction_hashes
        .into_iter()
        .filter(|hash| seen.insert(hash.clone()))
        .collect()
}
