//! Ethereum transaction service layer.
//!
//! This module contains the business logic for resolving transaction hashes into full
//! transaction records. Records are served from the database when present and otherwise
//! fetched from the Ethereum node, persisted and merged into the response.

pub mod fetch;
pub mod transaction;

#[cfg(test)]
mod tests;
