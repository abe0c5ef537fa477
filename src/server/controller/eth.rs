use axum::{
    extract::{Path, RawQuery, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        transaction::{TransactionDto, TransactionsDto},
    },
    server::{
        error::Error,
        model::{app::AppState, session::SessionUser},
        service::{eth::transaction::TransactionService, user::UserService},
        util::{query::query_values, rlp::decode_rlp_hash_list},
    },
};

pub static ETH_TAG: &str = "eth";

/// Query parameter carrying requested transaction hashes, may be repeated
pub static TRANSACTION_HASHES_PARAM: &str = "transactionHashes";

/// Look up transactions by hash
///
/// Stored transactions are served from the database; the rest are fetched from the Ethereum
/// node and stored. Hashes that cannot be resolved are left out of the response. Without any
/// `transactionHashes` parameter every stored transaction is returned.
///
/// # Responses
/// - 200 (Success): Resolved transactions
/// - 500 (Internal Server Error): Listing stored transactions failed
#[utoipa::path(
    get,
    path = "/api/eth",
    tag = ETH_TAG,
    params(
        ("transactionHashes" = Option<Vec<String>>, Query, description = "Transaction hash, repeat for several")
    ),
    responses(
        (status = 200, description = "Resolved transactions", body = TransactionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    session: SessionUser,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, Error> {
    let transaction_hashes = query
        .map(|query| query_values(&query, TRANSACTION_HASHES_PARAM))
        .unwrap_or_default();

    if transaction_hashes.is_empty() {
        let transactions = TransactionService::new(&state.db, &state.eth_client)
            .get_all_transactions()
            .await?;

        return Ok(Json(TransactionsDto::from(transactions)));
    }

    resolve_transactions(&state, session, transaction_hashes).await
}

/// Look up transactions by an RLP encoded list of hashes
///
/// The path segment is the hex encoding (optionally `0x` prefixed) of an RLP list of hash
/// strings. Resolution otherwise behaves like `GET /api/eth`.
///
/// # Responses
/// - 200 (Success): Resolved transactions
/// - 400 (Bad Request): Malformed RLP or an empty hash list
#[utoipa::path(
    get,
    path = "/api/eth/{rlphex}",
    tag = ETH_TAG,
    params(
        ("rlphex" = String, Path, description = "Hex encoded RLP list of transaction hashes")
    ),
    responses(
        (status = 200, description = "Resolved transactions", body = TransactionsDto),
        (status = 400, description = "Malformed RLP or no hashes", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions_by_rlp(
    State(state): State<AppState>,
    session: SessionUser,
    Path(rlphex): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let transaction_hashes = decode_rlp_hash_list(&rlphex)?;

    resolve_transactions(&state, session, transaction_hashes).await
}

/// List every stored transaction
///
/// # Responses
/// - 200 (Success): All stored transactions
/// - 500 (Internal Server Error): Database query failed
#[utoipa::path(
    get,
    path = "/api/all",
    tag = ETH_TAG,
    responses(
        (status = 200, description = "All stored transactions", body = TransactionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_transactions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let transactions = TransactionService::new(&state.db, &state.eth_client)
        .get_all_transactions()
        .await?;

    Ok(Json(TransactionsDto::from(transactions)))
}

/// Resolves hashes and, for signed-in users, records the lookup.
async fn resolve_transactions(
    state: &AppState,
    session: SessionUser,
    transaction_hashes: Vec<String>,
) -> Result<Json<TransactionsDto>, Error> {
    let transactions = TransactionService::new(&state.db, &state.eth_client)
        .with_fetch_concurrency(state.fetch_concurrency)
        .get_transactions_by_hashes(transaction_hashes)
        .await?;

    if let Some(user) = session.0 {
        let resolved: Vec<String> = transactions
            .iter()
            .map(|t| t.transaction_hash.clone())
            .collect();

        UserService::new(&state.db)
            .add_viewed_transactions(user.id, &resolved)
            .await;
    }

    Ok(Json(TransactionsDto {
        transactions: transactions.into_iter().map(TransactionDto::from).collect(),
    }))
}
