//! Command implementations for the motoshop CLI

pub mod init;
pub mod serve;

pub use init::run_init;
pub use serve::run_serve;

use std::path::PathBuf;

use clap::Args;

/// Locations of the persisted state, relative to the working directory by default
#[derive(Args, Debug, Clone)]
pub struct StorageArgs {
    /// SQLite database file (created if missing)
    #[arg(long, env = "MOTOSHOP_DATABASE", default_value = "db.sqlite")]
    pub database: PathBuf,

    /// Directory holding uploaded project photos
    #[arg(long, env = "MOTOSHOP_UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,
}
