use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Resolve the build target that runs all tests implied by a selection
#[derive(Parser)]
#[command(name = "test-scope")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve all tests beneath a directory
    #[command(visible_alias = "dir")]
    Directory {
        /// Directory to resolve
        dir: PathBuf,

        /// Workspace root (defaults to the current directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve an explicit selection of suites found beneath a directory
    #[command(visible_alias = "sel")]
    Selection {
        /// Directory the suites live beneath
        dir: PathBuf,

        /// Suite names to select (at least two)
        #[arg(required = true)]
        suites: Vec<String>,

        /// Workspace root (defaults to the current directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
}
