use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use rig_core::types::OutputFormat;
use rig_project::paths::{PROJECT_ENV_VAR, PROJECT_FILE};
use rig_project::{Project, ProjectError, ProjectResolver, init_project};

/// Resolve the project for this invocation and deliver its log records.
///
/// Precedence: `--project`, then `RIG_PROJECT`, then a search upward from
/// the working directory.
pub(crate) fn load_project(option: Option<&Path>) -> Result<Project> {
    let env = std::env::var_os(PROJECT_ENV_VAR).map(PathBuf::from);
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    load_project_with(&ProjectResolver::new(), option, env.as_deref(), &cwd)
}

pub(crate) fn load_project_with(
    resolver: &ProjectResolver,
    option: Option<&Path>,
    env: Option<&Path>,
    cwd: &Path,
) -> Result<Project> {
    let project = resolver
        .resolve(option, env, cwd)
        .context("Failed to load project")?;
    for record in project.logs() {
        record.emit();
    }
    for deprecation in project.deprecations() {
        deprecation.emit();
    }
    debug!(kind = %project.kind(), "resolved project at {}", project);
    Ok(project)
}

/// Machine-readable kind of the first project error in the chain.
pub(crate) fn error_kind(err: &anyhow::Error) -> Option<&'static str> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ProjectError>())
        .map(ProjectError::kind)
}

pub(crate) fn handle_project_show(project: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let project = load_project(project.as_deref())?;

    match format {
        OutputFormat::Json => {
            let json_str = serde_json::to_string_pretty(&project)?;
            println!("{}", json_str);
        }
        OutputFormat::Text => {
            print!("{}", render_text(&project)?);
        }
    }
    Ok(())
}

pub(crate) fn render_text(project: &Project) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Project: {}", project)?;
    writeln!(out, "Kind: {}", project.kind())?;
    writeln!(out, "Name: {}", project.name().unwrap_or("(none)"))?;
    writeln!(out, "Config file: {}", project.config_file().display())?;
    writeln!(out, "Inventory file: {}", project.inventory_file().display())?;
    let modulepath: Vec<String> = project
        .modulepath()
        .iter()
        .map(|dir| dir.display().to_string())
        .collect();
    writeln!(out, "Modulepath: {}", modulepath.join(", "))?;
    writeln!(out, "Hiera config: {}", project.hiera_config().display())?;
    writeln!(out, "Rigfile: {}", project.rigfile().display())?;
    writeln!(out, "Plans: {}", project.plans_path().display())?;
    writeln!(out, "Downloads: {}", project.downloads().display())?;

    let modules = project.modules();
    if !modules.is_empty() {
        writeln!(out, "Modules:")?;
        for module in modules {
            match module.version_requirement {
                Some(req) => writeln!(out, "  {} ({})", module.name, req)?,
                None => writeln!(out, "  {}", module.name)?,
            }
        }
    }

    if !project.settings().is_empty() {
        let settings =
            toml::to_string_pretty(project.settings()).context("Failed to render settings")?;
        writeln!(out, "Settings:")?;
        for line in settings.lines() {
            writeln!(out, "  {line}")?;
        }
    }
    Ok(out)
}

pub(crate) fn handle_project_validate(project: Option<PathBuf>) -> Result<()> {
    // Validation already ran while loading; its warnings were emitted there.
    let project = load_project(project.as_deref())?;
    eprintln!("{}", validation_summary(&project));
    Ok(())
}

pub(crate) fn validation_summary(project: &Project) -> String {
    if !project.project_file_exists() {
        return format!("No {PROJECT_FILE} found in {project}; nothing to validate.");
    }
    format!(
        "Project '{}' at {} is valid.",
        project.name().unwrap_or("(unnamed)"),
        project
    )
}

pub(crate) fn handle_project_init(dir: Option<PathBuf>, name: Option<String>) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine working directory")?,
    };
    let file = init_project(&dir, name.as_deref())
        .with_context(|| format!("Failed to initialize project in {}", dir.display()))?;
    eprintln!("Initialized project configuration at: {}", file.display());
    Ok(())
}

#[cfg(test)]
#[path = "project_cmds_tests.rs"]
mod tests;
