use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, transaction::TransactionsDto},
    server::{
        error::Error,
        model::{app::AppState, session::SessionUser},
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Get every transaction the signed-in user has looked up
///
/// # Responses
/// - 200 (Success): The user's looked up transactions
/// - 401 (Unauthorized): Missing or invalid `AUTH_TOKEN` header
#[utoipa::path(
    get,
    path = "/api/my",
    tag = USER_TAG,
    params(
        ("AUTH_TOKEN" = String, Header, description = "Session token from /api/authenticate")
    ),
    responses(
        (status = 200, description = "Looked up transactions", body = TransactionsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_transactions(
    State(state): State<AppState>,
    session: SessionUser,
) -> Result<impl IntoResponse, Error> {
    let user = session.require()?;

    let transactions = UserService::new(&state.db)
        .get_user_transactions(user.id)
        .await?;

    Ok(Json(TransactionsDto::from(transactions)))
}
