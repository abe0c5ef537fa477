//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI is
//! served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/eth` - Look up transactions by repeated `transactionHashes` parameters
/// - `GET /api/eth/{rlphex}` - Look up transactions by RLP encoded hash list
/// - `GET /api/all` - List every stored transaction
/// - `POST /api/authenticate` - Exchange credentials for a session token
/// - `GET /api/my` - List the signed-in user's looked up transactions
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "txfetch", description = "Ethereum transaction lookup API"), tags(
        (name = controller::eth::ETH_TAG, description = "Transaction lookup routes"),
        (name = controller::auth::AUTH_TAG, description = "Authentication routes"),
        (name = controller::user::USER_TAG, description = "User lookup history routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::eth::get_transactions))
        .routes(routes!(controller::eth::get_transactions_by_rlp))
        .routes(routes!(controller::eth::get_all_transactions))
        .routes(routes!(controller::auth::authenticate))
        .routes(routes!(controller::user::get_my_transactions))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
