use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod cli;
mod project_cmds;

use cli::{Cli, Commands, ProjectCommands};

fn main() -> ExitCode {
    // Initialize tracing (output to stderr, initialize only once)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if let Some(kind) = project_cmds::error_kind(&err) {
                eprintln!("  kind: {kind}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let output_format = cli.format.clone();

    match cli.command {
        Commands::Project { cmd } => match cmd {
            ProjectCommands::Show => {
                project_cmds::handle_project_show(cli.project, output_format)?;
            }
            ProjectCommands::Validate => {
                project_cmds::handle_project_validate(cli.project)?;
            }
            ProjectCommands::Init { dir, name } => {
                project_cmds::handle_project_init(dir, name)?;
            }
        },
    }

    Ok(())
}
