//! Log and deprecation records produced while resolving a project.
//!
//! Resolution runs before logging is fully configured, so messages are
//! collected in order and handed to the caller, which decides when to emit
//! them.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub level: Severity,
    pub message: String,
}

impl LogRecord {
    pub fn debug(message: impl Into<String>) -> Self {
        Self {
            level: Severity::Debug,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Severity::Info,
            message: message.into(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: Severity::Warn,
            message: message.into(),
        }
    }

    /// Forward the record to the active `tracing` subscriber.
    pub fn emit(&self) {
        match self.level {
            Severity::Debug => tracing::debug!("{}", self.message),
            Severity::Info => tracing::info!("{}", self.message),
            Severity::Warn => tracing::warn!("{}", self.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deprecation {
    /// Short label for the deprecated usage, stable across releases.
    pub kind: String,
    pub message: String,
}

impl Deprecation {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn emit(&self) {
        tracing::warn!(deprecation = %self.kind, "{}", self.message);
    }
}
