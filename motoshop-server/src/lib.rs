//! motoshop-server: HTTP backend for a motorcycle repair shop
//!
//! Tracks client projects, the jobs performed under each project, and the
//! payments received per job. One photo can be attached to each project.
//!
//! Layout:
//! - [`db`]: SQLite pool, schema initializer, repositories
//! - [`photos`]: directory-backed photo store
//! - [`http`]: axum router, handlers, error mapping

pub mod db;
pub mod http;
pub mod photos;

pub use db::{create_pool, DbError};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use photos::{PhotoError, PhotoStore};
