//! Server application models and type definitions.
//!
//! This module contains the shared application state, database model type aliases and the
//! request-scoped session user extracted from the authentication header.

pub mod app;
pub mod db;
pub mod session;
