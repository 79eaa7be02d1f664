//! Structural validation of project settings.
//!
//! Each recognized key has one rule in [`SCHEMA`]; rules run in table order
//! and the first violation aborts. Rules may also produce warnings, which are
//! returned to the caller. Settings are never modified.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use rig_core::ValidationError;

use crate::options::{MODULE_DECLARATION_KEYS, is_builtin_module};

const MISSING_NAME: &str =
    "No project name is specified in rig-project.toml. Project-level content will not be available.";

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("project name pattern is valid"));

type Check = fn(&'static str, &toml::Value) -> Result<Vec<String>, ValidationError>;

struct SettingRule {
    key: &'static str,
    /// Warning recorded when the key is missing; None means optional.
    when_absent: Option<&'static str>,
    check: Check,
}

const SCHEMA: &[SettingRule] = &[
    SettingRule {
        key: "name",
        when_absent: Some(MISSING_NAME),
        check: check_name,
    },
    SettingRule {
        key: "tasks",
        when_absent: None,
        check: check_array,
    },
    SettingRule {
        key: "plans",
        when_absent: None,
        check: check_array,
    },
    SettingRule {
        key: "modules",
        when_absent: None,
        check: check_modules,
    },
];

/// Validate project settings, returning warnings on success.
pub fn validate_settings(settings: &toml::Table) -> Result<Vec<String>, ValidationError> {
    let mut warnings = Vec::new();
    for rule in SCHEMA {
        match settings.get(rule.key) {
            Some(value) => warnings.extend((rule.check)(rule.key, value)?),
            None => warnings.extend(rule.when_absent.map(str::to_string)),
        }
    }
    Ok(warnings)
}

/// Whether `name` is usable as a project or module name.
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

fn check_name(_key: &'static str, value: &toml::Value) -> Result<Vec<String>, ValidationError> {
    let name = match value.as_str() {
        Some(name) if is_valid_name(name) => name,
        Some(name) => return Err(ValidationError::InvalidName(name.to_string())),
        None => return Err(ValidationError::InvalidName(value.to_string())),
    };
    if is_builtin_module(name) {
        return Err(ValidationError::NameCollision(name.to_string()));
    }
    Ok(Vec::new())
}

fn check_array(key: &'static str, value: &toml::Value) -> Result<Vec<String>, ValidationError> {
    if value.is_array() {
        Ok(Vec::new())
    } else {
        Err(ValidationError::WrongType {
            key: key.to_string(),
            found: value.type_str().to_string(),
        })
    }
}

fn check_modules(key: &'static str, value: &toml::Value) -> Result<Vec<String>, ValidationError> {
    check_array(key, value)?;
    let entries = value.as_array().map(Vec::as_slice).unwrap_or_default();

    let mut unknown: BTreeSet<&str> = BTreeSet::new();
    for entry in entries {
        let table = match entry.as_table() {
            Some(table) if table.contains_key("name") => table,
            _ => {
                return Err(ValidationError::BadModuleEntry {
                    entry: entry.to_string(),
                });
            }
        };
        for field in table.keys().map(String::as_str) {
            if !MODULE_DECLARATION_KEYS.contains(&field) {
                unknown.insert(field);
            }
        }
    }

    if unknown.is_empty() {
        Ok(Vec::new())
    } else {
        Ok(vec![format!(
            "Ignoring unknown keys in module declarations: {}.",
            unknown.into_iter().collect::<Vec<_>>().join(", ")
        )])
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
