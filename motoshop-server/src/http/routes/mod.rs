//! Route handlers organized by resource

pub mod health;
pub mod jobs;
pub mod payments;
pub mod photos;
pub mod projects;

use serde::Serialize;

/// Id of a newly inserted row
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Plain acknowledgment
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}
