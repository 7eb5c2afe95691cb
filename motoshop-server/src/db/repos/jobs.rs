//! Job repository
//!
//! A job's only mutable state is `is_done`, which moves from false to true.

use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Job record from database
#[derive(Debug, Clone, FromRow)]
pub struct Job {
    pub id: i64,
    pub project_id: i64,
    pub description: String,
    pub cost: i64,
    pub is_done: bool,
}

/// Job repository
pub struct JobRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> JobRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an open job under `project_id`.
    ///
    /// The project is not looked up first; a dangling reference is stored as is.
    pub async fn create(
        &self,
        project_id: i64,
        description: &str,
        cost: i64,
    ) -> Result<Job, DbError> {
        let job: Job = sqlx::query_as(
            r#"
            INSERT INTO jobs (project_id, description, cost, is_done)
            VALUES (?, ?, ?, 0)
            RETURNING id, project_id, description, cost, is_done
            "#,
        )
        .bind(project_id)
        .bind(description)
        .bind(cost)
        .fetch_one(self.pool)
        .await?;

        Ok(job)
    }

    /// List the jobs recorded under a project.
    pub async fn list_for_project(&self, project_id: i64) -> Result<Vec<Job>, DbError> {
        let jobs: Vec<Job> = sqlx::query_as(
            r#"
            SELECT id, project_id, description, cost, is_done
            FROM jobs
            WHERE project_id = ?
            ORDER BY id
            "#,
        )
        .bind(project_id)
        .fetch_all(self.pool)
        .await?;

        Ok(jobs)
    }

    /// Mark a job as done (idempotent).
    ///
    /// Returns the number of rows touched; zero when the id does not exist.
    pub async fn mark_done(&self, job_id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE jobs SET is_done = 1 WHERE id = ?")
            .bind(job_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
