//! Project resolution, loading and validation (`rig-project.toml`).

pub mod factory;
pub mod init;
pub mod log;
pub mod options;
pub mod paths;
pub mod project;
pub mod resolve;
pub mod settings;
pub mod validate;

pub use factory::create_project;
pub use init::init_project;
pub use log::{Deprecation, LogRecord, Severity};
pub use project::{ModuleDeclaration, Project};
pub use resolve::ProjectResolver;
pub use rig_core::{ProjectError, ProjectKind, ProjectResult, ValidationError};
pub use validate::validate_settings;
