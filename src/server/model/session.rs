//! Request-scoped user resolved from the `AUTH_TOKEN` header.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel},
    service::auth::AuthService,
};

/// Header carrying the session token.
pub const AUTH_TOKEN_HEADER: &str = "auth_token";

/// The user making the request, if any.
///
/// Extraction never rejects: a missing, invalid or expired token, or a token for a user that
/// no longer exists, all produce an anonymous session. Handlers that require a user call
/// [`SessionUser::require`].
#[derive(Debug, Clone, Default)]
pub struct SessionUser(pub Option<UserModel>);

impl SessionUser {
    /// Returns the user or `MissingToken` for anonymous requests.
    pub fn require(self) -> Result<UserModel, Error> {
        self.0.ok_or_else(|| AuthError::MissingToken.into())
    }
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = parts
            .headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|token| !token.is_empty())
        else {
            return Ok(Self(None));
        };

        match AuthService::new(&state.db, &state.jwt)
            .get_user_by_token(token)
            .await
        {
            Ok(user) => Ok(Self(Some(user))),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring invalid authentication token");
                Ok(Self(None))
            }
        }
    }
}
