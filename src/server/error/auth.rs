use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("No authentication token provided")]
    MissingToken,
    #[error("Invalid authentication token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("Token subject {0:?} is not a valid user ID")]
    InvalidSubject(String),
    #[error("User ID {0:?} not found in database despite holding a valid token")]
    UserNotInDatabase(i32),
    #[error("Failed to sign authentication token: {0}")]
    TokenSigningFailed(jsonwebtoken::errors::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::TokenSigningFailed(_) => InternalServerError(self).into_response(),
            err => {
                tracing::debug!("Authentication error: {}", err);

                error_response(StatusCode::UNAUTHORIZED, "invalid credentials")
            }
        }
    }
}
