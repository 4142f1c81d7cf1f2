//! CLI interface for jobpath

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobpath")]
#[command(author = "Krakaw")]
#[command(version = "0.1.0")]
#[command(about = "Map pipeline scripts to remote job paths", long_about = None)]
pub struct Cli {
    /// Workspace root folders. Global configs are only searched with exactly one root.
    #[arg(
        short,
        long,
        global = true,
        env = "JOBPATH_WORKSPACE",
        value_delimiter = ','
    )]
    pub workspace: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the sidecar config for a script
    Init {
        /// Path to the pipeline script
        script: PathBuf,

        /// Reset an existing sidecar to defaults
        #[arg(short, long)]
        force: bool,
    },

    /// Show a script's config and resolved job path
    Show {
        /// Path to the pipeline script
        script: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Print only the resolved job path
    Name {
        /// Path to the pipeline script
        script: PathBuf,
    },

    /// Print the sidecar path for a script
    Path {
        /// Path to the pipeline script
        script: PathBuf,
    },

    /// Change fields of a script's config and save it
    Set {
        /// Path to the pipeline script
        script: PathBuf,

        /// Job name
        #[arg(short, long)]
        name: Option<String>,

        /// Folder placement; pass an empty string to derive it again
        #[arg(long)]
        folder: Option<String>,

        /// Build parameters as JSON
        #[arg(short, long)]
        params: Option<String>,

        /// Interactive input override as JSON
        #[arg(short, long)]
        interactive_input_override: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}
