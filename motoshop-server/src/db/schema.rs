//! Schema initializer for the projects, jobs and payments tables

use sqlx::SqlitePool;

use super::DbError;

/// Create the three tables if they are absent.
///
/// Safe to call on an already-initialized database. Existing tables are used
/// as they are, whatever their shape.
pub async fn init(pool: &SqlitePool) -> Result<(), DbError> {
    tracing::info!("Ensuring database schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY,
            client_name TEXT NOT NULL,
            moto_info TEXT NOT NULL,
            created_at TEXT NOT NULL,
            photo TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // project_id / job_id are informal references, no FOREIGN KEY
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id INTEGER PRIMARY KEY,
            project_id INTEGER NOT NULL,
            description TEXT NOT NULL,
            cost INTEGER NOT NULL,
            is_done INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS payments (
            id INTEGER PRIMARY KEY,
            job_id INTEGER NOT NULL,
            amount INTEGER NOT NULL,
            paid_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("Schema ready");
    Ok(())
}
