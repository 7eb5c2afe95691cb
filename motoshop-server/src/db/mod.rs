//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One SQLite pool per process, handed to handlers through `AppState`
//! - Schema is created with `CREATE TABLE IF NOT EXISTS`, no migrations
//! - References between rows are informal: no existence checks on insert

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
