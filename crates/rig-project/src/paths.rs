use std::path::{Component, Path, PathBuf};

/// XDG app name used for the per-user default project.
pub const APP_NAME: &str = "rig";

/// Marker directory that embeds a project inside a larger repository.
pub const MARKER_DIR: &str = "Rigdir";
/// Current-format project settings file.
pub const PROJECT_FILE: &str = "rig-project.toml";
/// Legacy-format configuration file, still read for tool options.
pub const LEGACY_CONFIG_FILE: &str = "rig.toml";
/// Short-lived alternate name for the project file.
pub const DEPRECATED_PROJECT_FILE: &str = "project.toml";

pub const INVENTORY_FILE: &str = "inventory.toml";
pub const MODULE_DIRS: [&str; 3] = ["modules", "site-modules", "site"];
pub const HIERA_CONFIG: &str = "hiera.yaml";
pub const RIGFILE: &str = "Rigfile";
pub const RERUN_FILE: &str = ".rerun.json";
pub const RESOURCE_TYPES_DIR: &str = ".resource_types";
pub const DOWNLOADS_DIR: &str = "downloads";
pub const PLANS_DIR: &str = "plans";
pub const MANAGED_MODULE_DIR: &str = ".modules";

/// Environment variable naming a project directory to use as-is.
pub const PROJECT_ENV_VAR: &str = "RIG_PROJECT";

/// Per-user default project directory, e.g. `~/.config/rig`.
///
/// Returns None when no home directory can be determined (e.g. containers
/// without HOME).
pub fn user_project_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// System-wide default project directory.
pub fn system_project_dir() -> PathBuf {
    #[cfg(windows)]
    {
        std::env::var_os("PROGRAMDATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData"))
            .join(APP_NAME)
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/etc").join(APP_NAME)
    }
}

fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Make `path` absolute against the current directory and normalize it.
pub fn expand_path(path: &Path) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    expand_path_from(path, &cwd, home_dir().as_deref())
}

/// Expand a leading `~`, join relative paths onto `cwd` and drop `.`/`..`
/// components lexically. Symlinks are not resolved.
pub(crate) fn expand_path_from(path: &Path, cwd: &Path, home: Option<&Path>) -> PathBuf {
    let path = match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    };
    let absolute = if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    };
    normalize(&absolute)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// True when the directory grants write permission to everyone.
///
/// A path that cannot be stat'ed is reported as not world-writable.
#[cfg(unix)]
pub fn is_world_writable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.permissions().mode() & 0o002 != 0)
        .unwrap_or(false)
}

/// Windows has no meaningful world-writable bit.
#[cfg(not(unix))]
pub fn is_world_writable(_path: &Path) -> bool {
    false
}
