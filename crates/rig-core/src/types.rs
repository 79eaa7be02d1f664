use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a project directory was discovered.
///
/// The kind only varies resolution policy (directory creation, existence and
/// permission checks); it never changes what the project contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// Passed explicitly with `--project`.
    Option,
    /// Per-user default project.
    User,
    /// System-wide default project, used when no user directory is known.
    System,
    /// A `Rigdir` marker directory found while walking up.
    Embedded,
    /// A directory holding `rig.toml` or `rig-project.toml`.
    Local,
    /// Supplied through the `RIG_PROJECT` environment variable.
    Environment,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 6] = [
        Self::Option,
        Self::User,
        Self::System,
        Self::Embedded,
        Self::Local,
        Self::Environment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Option => "option",
            Self::User => "user",
            Self::System => "system",
            Self::Embedded => "embedded",
            Self::Local => "local",
            Self::Environment => "environment",
        }
    }

    /// Whether resolution creates the directory when it is missing.
    pub fn creates_missing_dir(&self) -> bool {
        matches!(self, Self::User)
    }

    /// Whether a missing directory is a hard error.
    pub fn requires_existing_dir(&self) -> bool {
        matches!(self, Self::Option)
    }

    /// Whether a world-writable directory is rejected.
    ///
    /// An environment-supplied path is the documented way for an operator to
    /// force a world-writable project, so it is exempt.
    pub fn checks_world_writable(&self) -> bool {
        !matches!(self, Self::Environment)
    }

    /// Default projects are announced as such in log messages.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::User | Self::System)
    }
}

impl std::fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProjectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown project kind '{s}'. Expected one of: option, user, system, \
                     embedded, local, environment"
                )
            })
    }
}

/// Output format for CLI responses
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
