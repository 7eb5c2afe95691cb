//! motoshop CLI - runs the repair shop backend
//!
//! - `motoshop serve`: HTTP API over the SQLite store and photo directory
//! - `motoshop init`: create the database tables and upload directory, then exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "motoshop",
    author,
    version,
    about = "Record keeping backend for a motorcycle repair shop",
    long_about = "Tracks client projects, the jobs done under each project and the payments \
                  received per job, with one photo per project."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the database schema and upload directory, then exit
    Init(commands::init::InitArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Init(args) => commands::run_init(args).await?,
    }

    Ok(())
}
