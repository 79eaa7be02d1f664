use std::path::{Path, PathBuf};

use rig_core::{ProjectError, ProjectResult, ValidationError};

use crate::options::is_builtin_module;
use crate::paths::{PROJECT_FILE, expand_path};
use crate::validate::is_valid_name;

/// Create `rig-project.toml` in `dir`, creating the directory if needed.
///
/// Without an explicit `name` the directory's basename is used. Existing
/// project files are never overwritten. Returns the path of the new file.
pub fn init_project(dir: &Path, name: Option<&str>) -> ProjectResult<PathBuf> {
    let dir = expand_path(dir);
    let project_file = dir.join(PROJECT_FILE);
    if project_file.exists() {
        return Err(ProjectError::AlreadyExists { path: project_file });
    }

    let name = match name {
        Some(name) => name.to_string(),
        None => dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
    };
    if !is_valid_name(&name) {
        return Err(ValidationError::InvalidName(name).into());
    }
    if is_builtin_module(&name) {
        return Err(ValidationError::NameCollision(name).into());
    }

    std::fs::create_dir_all(&dir).map_err(|source| ProjectError::Io {
        path: dir.clone(),
        source,
    })?;
    let mut settings = toml::Table::new();
    settings.insert("name".to_string(), toml::Value::String(name));
    std::fs::write(&project_file, settings.to_string()).map_err(|source| ProjectError::Io {
        path: project_file.clone(),
        source,
    })?;

    Ok(project_file)
}
