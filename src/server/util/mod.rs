//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers for Ethereum value formatting and parsing, decoding of
//! RLP encoded request payloads, query string parsing and duration parsing for configuration.

pub mod eth;
pub mod query;
pub mod rlp;
pub mod time;
