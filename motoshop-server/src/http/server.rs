//! Axum server setup
//!
//! Server skeleton with:
//! - CORS open to every origin, with credentials
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::{schema, DbError};
use crate::photos::{PhotoError, PhotoStore, PHOTO_URL_PREFIX};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub photos: PhotoStore,
}

impl AppState {
    pub fn new(pool: SqlitePool, photos: PhotoStore) -> Self {
        Self { pool, photos }
    }
}

/// Build the application router with all routes.
pub fn build_router(state: AppState) -> Router {
    // Mirrors the request origin; `*` cannot be combined with credentials
    let cors = CorsLayer::very_permissive();
    let uploads = ServeDir::new(state.photos.root());

    Router::new()
        .merge(routes::health::router())
        .merge(routes::projects::router())
        .merge(routes::photos::router())
        .merge(routes::jobs::router())
        .merge(routes::payments::router())
        .nest_service(PHOTO_URL_PREFIX, uploads)
        // Photo uploads carry no size limit
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server.
///
/// Ensures the schema and the upload directory exist before binding.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("db.sqlite").await?;
/// let photos = PhotoStore::new("uploads");
/// run_server(pool, photos, ServerConfig::default()).await?;
/// ```
pub async fn run_server(
    pool: SqlitePool,
    photos: PhotoStore,
    config: ServerConfig,
) -> Result<(), ServerError> {
    schema::init(&pool).await?;
    photos.ensure_dir().await?;
    tracing::info!(upload_dir = %photos.root().display(), "Photo store ready");

    let app = build_router(AppState::new(pool, photos));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database initialization failed: {0}")]
    Database(#[from] DbError),

    #[error("photo store initialization failed: {0}")]
    Photos(#[from] PhotoError),
}
