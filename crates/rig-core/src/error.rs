use std::path::PathBuf;

/// Structural problems found in `rig-project.toml`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Invalid project name '{0}' in rig-project.toml; project name must begin with a \
         lowercase letter and can include lowercase letters, numbers, and underscores."
    )]
    InvalidName(String),

    #[error(
        "The project '{0}' will not be loaded. The project name conflicts with a built-in \
         rig module of the same name."
    )]
    NameCollision(String),

    #[error("'{key}' in rig-project.toml must be an array (got {found})")]
    WrongType { key: String, found: String },

    #[error("Module declaration {entry} must be a table with a name key")]
    BadModuleEntry { entry: String },
}

impl ValidationError {
    /// Stable machine-readable kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => "rig/invalid-project-name",
            Self::NameCollision(_) => "rig/project-name-collision",
            Self::WrongType { .. } => "rig/invalid-setting-type",
            Self::BadModuleEntry { .. } => "rig/invalid-module-declaration",
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Could not find project at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error(
        "Project directory '{dir}' is world-writable which poses a security risk. \
         Set RIG_PROJECT='{dir}' to force the use of this project directory.",
        dir = .path.display()
    )]
    WorldWritable { path: PathBuf },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("A project configuration already exists at {}", .path.display())]
    AlreadyExists { path: PathBuf },
}

impl ProjectError {
    /// Stable machine-readable kind for programmatic handling.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "rig/project-error",
            Self::WorldWritable { .. } => "rig/world-writable-error",
            Self::Validation(err) => err.kind(),
            Self::Parse { .. } => "rig/parse-error",
            Self::Io { .. } => "rig/file-error",
            Self::AlreadyExists { .. } => "rig/project-exists",
        }
    }
}

pub type ProjectResult<T> = std::result::Result<T, ProjectError>;
