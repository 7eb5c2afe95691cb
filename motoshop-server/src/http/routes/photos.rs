//! Photo download endpoint

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /photo/{fname} - raw bytes of a stored photo
async fn get_photo(
    State(state): State<Arc<AppState>>,
    Path(fname): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let photo = state.photos.retrieve(&fname).await?;

    Ok(([(header::CONTENT_TYPE, photo.content_type())], photo.bytes))
}

/// Photo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/photo/{fname}", get(get_photo))
}
