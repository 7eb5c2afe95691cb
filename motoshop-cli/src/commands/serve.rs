//! HTTP server command
//!
//! Opens the database, then runs the API until Ctrl+C / SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use motoshop_server::{create_pool, run_server, PhotoStore, ServerConfig};

use super::StorageArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "MOTOSHOP_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub storage: StorageArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(
        database = %args.storage.database.display(),
        "Starting motoshop server on {}",
        args.bind
    );

    let pool = create_pool(&args.storage.database)
        .await
        .with_context(|| format!("Failed to open {}", args.storage.database.display()))?;
    let photos = PhotoStore::new(args.storage.upload_dir);

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Blocks until shutdown
    run_server(pool, photos, config)
        .await
        .context("Server error")?;

    Ok(())
}
