//! Test fixture modules for database and HTTP mock creation.
//!
//! - `eth` - Signed transactions, receipts and mock JSON-RPC node endpoints
//! - `user` - User accounts and viewed transaction records

pub mod eth;
pub mod user;
