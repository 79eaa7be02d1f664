//! Shared types and errors for rig project resolution.

pub mod error;
pub mod types;

pub use error::{ProjectError, ProjectResult, ValidationError};
pub use types::{OutputFormat, ProjectKind};
