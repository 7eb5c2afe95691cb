//! Project repository
//!
//! Projects are created once and never updated or deleted.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Project record from database
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: i64,
    pub client_name: String,
    pub moto_info: String,
    pub created_at: DateTime<Utc>,
    pub photo: Option<String>,
}

/// Fields supplied by the client when opening a project
#[derive(Debug, Clone)]
pub struct NewProject {
    pub client_name: String,
    pub moto_info: String,
    /// Path returned by the photo store, if a photo was uploaded
    pub photo: Option<String>,
}

/// Project repository
pub struct ProjectRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProjectRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a project stamped with the current time.
    pub async fn create(&self, project: NewProject) -> Result<Project, DbError> {
        let row: Project = sqlx::query_as(
            r#"
            INSERT INTO projects (client_name, moto_info, created_at, photo)
            VALUES (?, ?, ?, ?)
            RETURNING id, client_name, moto_info, created_at, photo
            "#,
        )
        .bind(&project.client_name)
        .bind(&project.moto_info)
        .bind(Utc::now())
        .bind(&project.photo)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// List every project in insertion order.
    pub async fn list(&self) -> Result<Vec<Project>, DbError> {
        let rows: Vec<Project> = sqlx::query_as(
            r#"
            SELECT id, client_name, moto_info, created_at, photo
            FROM projects
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
