//! Service layer for business logic.
//!
//! Services coordinate between repositories and the Ethereum node: transaction resolution,
//! authentication and per-user lookup history.

pub mod auth;
pub mod eth;
pub mod user;
