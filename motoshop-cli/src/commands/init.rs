//! Storage initialization command

use anyhow::{Context, Result};
use clap::Parser;

use motoshop_server::db::schema;
use motoshop_server::{create_pool, PhotoStore};

use super::StorageArgs;

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    #[command(flatten)]
    pub storage: StorageArgs,
}

/// Create tables and the upload directory. Safe to re-run.
pub async fn run_init(args: InitArgs) -> Result<()> {
    let database = &args.storage.database;
    let pool = create_pool(database)
        .await
        .with_context(|| format!("Failed to open {}", database.display()))?;
    schema::init(&pool)
        .await
        .context("Failed to create tables")?;
    pool.close().await;

    let photos = PhotoStore::new(&args.storage.upload_dir);
    photos
        .ensure_dir()
        .await
        .with_context(|| format!("Failed to create {}", photos.root().display()))?;

    println!(
        "Initialized {} and {}",
        database.display(),
        photos.root().display()
    );
    Ok(())
}
