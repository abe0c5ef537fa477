use serde::{Deserialize, Serialize};

/// Credentials submitted to the authenticate endpoint
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthenticateDto {
    pub username: String,
    pub password: String,
}

/// Signed token returned after successful authentication
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenDto {
    pub token: String,
}
