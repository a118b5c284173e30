//! maildesk library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `http`: Axum router and handlers
//! - `service`: email-record operations and validation
//! - `db`: migrations, seeding and SQLite helpers
//! - `models`: typed records used across layers
//! - `error`: API error type and status mapping
//! - `util`: tracing setup

pub mod app;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod service;
pub mod util;
