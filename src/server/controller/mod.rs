//! HTTP controller endpoints for the transaction lookup API.
//!
//! Axum handlers for transaction lookups, authentication and per-user lookup history. Handlers
//! delegate to the service layer and are documented with utoipa for the OpenAPI spec.

pub mod auth;
pub mod eth;
pub mod user;
