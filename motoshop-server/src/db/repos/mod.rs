//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and issues parameterized queries
//! against a single table. Inserts use `RETURNING` so the caller gets the
//! stored row back in one round trip.

pub mod jobs;
pub mod payments;
pub mod projects;

pub use jobs::{Job, JobRepo};
pub use payments::{Payment, PaymentRepo};
pub use projects::{NewProject, Project, ProjectRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
