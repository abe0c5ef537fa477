use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthenticateDto, TokenDto},
    },
    server::{error::Error, model::app::AppState, service::auth::AuthService},
};

pub static AUTH_TAG: &str = "auth";

/// Exchange a username and password for a session token
///
/// The returned token is sent back in the `AUTH_TOKEN` header to link lookups to the user.
///
/// # Responses
/// - 200 (Success): Signed session token
/// - 401 (Unauthorized): Unknown user or wrong password
#[utoipa::path(
    post,
    path = "/api/authenticate",
    tag = AUTH_TAG,
    request_body = AuthenticateDto,
    responses(
        (status = 200, description = "Authenticated", body = TokenDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn authenticate(
    State(state): State<AppState>,
    Json(credentials): Json<AuthenticateDto>,
) -> Result<impl IntoResponse, Error> {
    let token = AuthService::new(&state.db, &state.jwt)
        .authenticate(&credentials.username, &credentials.password)
        .await?;

    Ok(Json(TokenDto { token }))
}
