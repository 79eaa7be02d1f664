use std::path::Path;

use rig_core::{ProjectError, ProjectKind, ProjectResult};

use crate::log::LogRecord;
use crate::paths::{PROJECT_FILE, expand_path, is_world_writable};
use crate::project::Project;
use crate::settings::read_optional_table;

/// Build a project rooted at `path`, applying the policy for `kind`.
///
/// - `User` projects are created when missing; failure to create one only
///   logs a warning, so read-only homes still work.
/// - `Option` projects must already exist.
/// - World-writable directories are rejected unless the path came from
///   `RIG_PROJECT`.
pub fn create_project(
    path: &Path,
    kind: ProjectKind,
    mut logs: Vec<LogRecord>,
) -> ProjectResult<Project> {
    let fullpath = expand_path(path);

    if kind.creates_missing_dir() {
        if let Err(err) = std::fs::create_dir_all(&fullpath) {
            logs.push(LogRecord::warn(format!(
                "Could not create default project at '{}'. Continuing without a writable \
                 project. Log and rerun files will not be written.",
                fullpath.display()
            )));
            logs.push(LogRecord::debug(format!(
                "create_dir_all({}) failed: {err}",
                fullpath.display()
            )));
        }
    }

    if kind.requires_existing_dir() && !fullpath.is_dir() {
        return Err(ProjectError::NotFound { path: fullpath });
    }

    if kind.checks_world_writable() && is_world_writable(&fullpath) {
        return Err(ProjectError::WorldWritable { path: fullpath });
    }

    let project_file = fullpath.join(PROJECT_FILE);
    let data = read_optional_table(&project_file)?;
    if project_file.exists() {
        let default = if kind.is_default() { "default " } else { "" };
        logs.push(LogRecord::info(format!(
            "Loaded {default}project from '{}'",
            fullpath.display()
        )));
    }

    Project::new(data, &fullpath, kind, logs)
}
