//! Locating the project directory for an invocation.

use std::path::{Path, PathBuf};

use rig_core::{ProjectKind, ProjectResult};

use crate::factory::create_project;
use crate::log::LogRecord;
use crate::paths::{
    LEGACY_CONFIG_FILE, MARKER_DIR, PROJECT_FILE, expand_path, system_project_dir,
    user_project_dir,
};
use crate::project::Project;

/// Resolves projects, falling back to a default location when no project
/// is found above the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectResolver {
    user_dir: Option<PathBuf>,
    system_dir: PathBuf,
}

impl Default for ProjectResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectResolver {
    /// Use the platform's per-user and system-wide default locations.
    pub fn new() -> Self {
        Self::with_default_dirs(user_project_dir(), system_project_dir())
    }

    /// Use explicit default locations. `user_dir` is None when no home
    /// directory is available.
    pub fn with_default_dirs(user_dir: Option<PathBuf>, system_dir: PathBuf) -> Self {
        Self {
            user_dir,
            system_dir,
        }
    }

    /// Pick the project for an invocation: an explicit `--project` path,
    /// then `RIG_PROJECT`, then a search upward from `cwd`.
    pub fn resolve(
        &self,
        option: Option<&Path>,
        env: Option<&Path>,
        cwd: &Path,
    ) -> ProjectResult<Project> {
        if let Some(path) = option {
            return create_project(path, ProjectKind::Option, Vec::new());
        }
        if let Some(path) = env.filter(|path| !path.as_os_str().is_empty()) {
            return create_project(path, ProjectKind::Environment, Vec::new());
        }
        self.find_project_dir(cwd, Vec::new())
    }

    /// Where the default project lives and which kind it has.
    pub fn default_location(&self) -> (PathBuf, ProjectKind) {
        match &self.user_dir {
            Some(dir) => (dir.clone(), ProjectKind::User),
            None => (self.system_dir.clone(), ProjectKind::System),
        }
    }

    pub fn default_project(&self, logs: Vec<LogRecord>) -> ProjectResult<Project> {
        let (path, kind) = self.default_location();
        create_project(&path, kind, logs)
    }

    /// Walk up from `start` until a directory looks like a project.
    ///
    /// A `Rigdir` child wins over settings files in the same directory.
    /// Reaching the filesystem root yields the default project.
    pub fn find_project_dir(
        &self,
        start: &Path,
        mut logs: Vec<LogRecord>,
    ) -> ProjectResult<Project> {
        let mut dir = expand_path(start);
        loop {
            let marker = dir.join(MARKER_DIR);
            if marker.is_dir() {
                return create_project(&marker, ProjectKind::Embedded, logs);
            }
            if dir.join(LEGACY_CONFIG_FILE).is_file() || dir.join(PROJECT_FILE).is_file() {
                return create_project(&dir, ProjectKind::Local, logs);
            }
            let Some(parent) = dir.parent().map(Path::to_path_buf) else {
                return self.default_project(logs);
            };
            logs.push(LogRecord::debug(format!(
                "Did not detect {MARKER_DIR}, {LEGACY_CONFIG_FILE}, or {PROJECT_FILE} at '{}'. \
                 This directory won't be loaded as a project.",
                dir.display()
            )));
            dir = parent;
        }
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
