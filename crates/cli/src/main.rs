use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Directory { dir, root, json } => {
            commands::directory_command(&dir, root.as_deref(), json).await?
        }
        Commands::Selection {
            dir,
            suites,
            root,
            json,
        } => commands::selection_command(&dir, &suites, root.as_deref(), json).await?,
    };
    std::process::exit(code);
}
