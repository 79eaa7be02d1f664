use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rig_core::types::OutputFormat;

#[derive(Parser)]
#[command(name = "rig")]
#[command(about = "rig: task and plan runner for fleets of machines")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project directory to use instead of searching from the working directory
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect and manage the project
    Project {
        #[command(subcommand)]
        cmd: ProjectCommands,
    },
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Show the resolved project, its paths and settings
    Show,
    /// Validate rig-project.toml
    Validate,
    /// Create rig-project.toml
    Init {
        /// Directory to initialize (defaults to CWD)
        dir: Option<PathBuf>,

        /// Project name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,
    },
}
