//! API data transfer objects shared by the HTTP layer and its consumers.

pub mod api;
pub mod auth;
pub mod transaction;
