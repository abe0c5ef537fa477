//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organized by domain
//! (stored transactions and user accounts).

pub mod eth;
pub mod user;
