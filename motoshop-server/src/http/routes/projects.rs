//! Project endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde::Serialize;

use crate::db::repos::{NewProject, Project, ProjectRepo};
use crate::http::error::ApiError;
use crate::http::extractors::FormFields;
use crate::http::server::AppState;

/// Response for a freshly created project
#[derive(Debug, Serialize)]
pub struct CreatedProjectResponse {
    pub id: i64,
    pub client_name: String,
    pub moto_info: String,
    pub photo: Option<String>,
}

/// Project as listed
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub client_name: String,
    pub moto_info: String,
    pub created_at: String,
    pub photo: Option<String>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            client_name: p.client_name,
            moto_info: p.moto_info,
            created_at: p.created_at.to_rfc3339(),
            photo: p.photo,
        }
    }
}

/// POST /project - open a project, optionally with a photo
async fn create_project(
    State(state): State<Arc<AppState>>,
    mut form: FormFields,
) -> Result<Json<CreatedProjectResponse>, ApiError> {
    let client_name = form.text("client_name")?.to_owned();
    let moto_info = form.text("moto_info")?.to_owned();

    let photo = match form.take_file() {
        Some(file) => Some(state.photos.store(&file.bytes, &file.filename).await?),
        None => None,
    };

    let project = ProjectRepo::new(&state.pool)
        .create(NewProject {
            client_name,
            moto_info,
            photo,
        })
        .await?;

    tracing::info!(id = project.id, client = %project.client_name, "Created project");

    Ok(Json(CreatedProjectResponse {
        id: project.id,
        client_name: project.client_name,
        moto_info: project.moto_info,
        photo: project.photo,
    }))
}

/// GET /projects - list all projects
async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects = ProjectRepo::new(&state.pool).list().await?;
    tracing::debug!(count = projects.len(), "Listed projects");

    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

/// Project routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/project", post(create_project))
        .route("/projects", get(list_projects))
}
