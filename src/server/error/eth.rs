use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ethers::types::SignatureError;
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum EthError {
    #[error("bad request: at least one transaction hash is required")]
    EmptyHashList,
    #[error("bad request: invalid RLP encoded transaction hash list: {0}")]
    InvalidRlp(String),
    #[error("Transaction {0} not found on node")]
    TransactionNotFound(String),
    #[error("Receipt for transaction {0} not found on node")]
    ReceiptNotFound(String),
    #[error("Transaction {0} has not been included in a block yet")]
    PendingTransaction(String),
    #[error("Failed to recover sender of transaction {hash}: {source}")]
    SenderRecovery {
        hash: String,
        #[source]
        source: SignatureError,
    },
}

impl IntoResponse for EthError {
    fn into_response(self) -> Response {
        match self {
            Self::EmptyHashList | Self::InvalidRlp(_) => {
                tracing::debug!("Rejected transaction request: {}", self);

                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
