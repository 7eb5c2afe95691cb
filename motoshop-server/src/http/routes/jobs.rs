//! Job endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde::Serialize;

use super::{CreatedResponse, OkResponse};
use crate::db::repos::{Job, JobRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{FormFields, IdPath};
use crate::http::server::AppState;

/// Job response
#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub id: i64,
    pub project_id: i64,
    pub description: String,
    pub cost: i64,
    pub is_done: bool,
}

impl From<Job> for JobResponse {
    fn from(j: Job) -> Self {
        Self {
            id: j.id,
            project_id: j.project_id,
            description: j.description,
            cost: j.cost,
            is_done: j.is_done,
        }
    }
}

/// POST /job - add a job to a project
async fn create_job(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> Result<Json<CreatedResponse>, ApiError> {
    let project_id = form.int("project_id")?;
    let description = form.text("description")?;
    let cost = form.int("cost")?;

    let job = JobRepo::new(&state.pool)
        .create(project_id, description, cost)
        .await?;
    tracing::info!(id = job.id, project_id, cost, "Created job");

    Ok(Json(CreatedResponse { id: job.id }))
}

/// GET /jobs/{project_id} - list jobs for a project
async fn list_jobs(
    State(state): State<Arc<AppState>>,
    IdPath(project_id): IdPath,
) -> Result<Json<Vec<JobResponse>>, ApiError> {
    let jobs = JobRepo::new(&state.pool).list_for_project(project_id).await?;

    Ok(Json(jobs.into_iter().map(JobResponse::from).collect()))
}

/// POST /job_done/{job_id} - mark a job done
///
/// Succeeds whether or not the job exists.
async fn mark_done(
    State(state): State<Arc<AppState>>,
    IdPath(job_id): IdPath,
) -> Result<Json<OkResponse>, ApiError> {
    let updated = JobRepo::new(&state.pool).mark_done(job_id).await?;
    if updated == 0 {
        tracing::debug!(job_id, "mark done matched no job");
    } else {
        tracing::info!(job_id, "Marked job done");
    }

    Ok(Json(OkResponse { ok: true }))
}

/// Job routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/job", post(create_job))
        .route("/jobs/{project_id}", get(list_jobs))
        .route("/job_done/{job_id}", post(mark_done))
}
