//! Server application core modules.
//!
//! This module contains the HTTP API for looking up Ethereum transactions: routing and
//! controllers, transaction resolution against the database and an Ethereum node, token
//! authentication and per-user lookup history.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod eth;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
