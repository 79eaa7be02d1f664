use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use rig_core::{ProjectKind, ProjectResult};
use serde::Serialize;

use crate::log::{Deprecation, LogRecord};
use crate::options::{is_tool_option, is_transport_option};
use crate::paths::{
    DEPRECATED_PROJECT_FILE, DOWNLOADS_DIR, HIERA_CONFIG, INVENTORY_FILE, LEGACY_CONFIG_FILE,
    MANAGED_MODULE_DIR, MODULE_DIRS, PLANS_DIR, PROJECT_FILE, RERUN_FILE, RESOURCE_TYPES_DIR,
    RIGFILE, expand_path,
};
use crate::validate::validate_settings;

const LEGACY_CONFIG_DEPRECATION: &str = "Project-level configuration in rig.toml is deprecated if \
     using rig-project.toml. Transport config should be set in inventory.toml, all other config \
     should be set in rig-project.toml.";

/// The resolved project for one invocation.
///
/// Constructed once and read-only afterwards. Two projects are equal when
/// their paths are equal.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    path: PathBuf,
    kind: ProjectKind,
    settings: toml::Table,
    project_file: PathBuf,
    legacy_config_file: PathBuf,
    config_file: PathBuf,
    inventory_file: PathBuf,
    modulepath: Vec<PathBuf>,
    hiera_config: PathBuf,
    rigfile: PathBuf,
    rerun_file: PathBuf,
    resource_types: PathBuf,
    downloads: PathBuf,
    plans_path: PathBuf,
    managed_moduledir: PathBuf,
    logs: Vec<LogRecord>,
    deprecations: Vec<Deprecation>,
}

/// One entry of the `modules` setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDeclaration {
    pub name: String,
    pub version_requirement: Option<String>,
}

impl Project {
    /// Build a project from already-loaded settings.
    ///
    /// Transport keys are dropped from `raw`, the canonical config file is
    /// chosen, and settings are validated when `rig-project.toml` exists.
    /// `logs` holds records from earlier resolution steps and is extended.
    pub fn new(
        raw: toml::Table,
        path: &Path,
        kind: ProjectKind,
        mut logs: Vec<LogRecord>,
    ) -> ProjectResult<Self> {
        let path = expand_path(path);
        let project_file = path.join(PROJECT_FILE);
        let legacy_config_file = path.join(LEGACY_CONFIG_FILE);
        let has_project_file = project_file.is_file();
        let has_legacy_file = legacy_config_file.is_file();

        let mut deprecations = Vec::new();
        if has_legacy_file && has_project_file {
            deprecations.push(Deprecation::new(
                "Using rig.toml for project configuration",
                LEGACY_CONFIG_DEPRECATION,
            ));
        }
        if path.join(DEPRECATED_PROJECT_FILE).is_file() {
            deprecations.push(Deprecation::new(
                "Using project.toml instead of rig-project.toml",
                "Project configuration file 'project.toml' is deprecated; use \
                 'rig-project.toml' instead.",
            ));
        }

        let (transport, settings): (toml::Table, toml::Table) = raw
            .into_iter()
            .partition(|(key, _)| is_transport_option(key));
        if !transport.is_empty() {
            let keys: Vec<&str> = transport.keys().map(String::as_str).collect();
            logs.push(LogRecord::warn(format!(
                "Transport configuration isn't supported in rig-project.toml. Ignoring keys {keys:?}"
            )));
        }

        // A project file holding only project keys leaves rig.toml in charge.
        let config_file = if settings.keys().any(|key| is_tool_option(key)) {
            if has_legacy_file {
                logs.push(LogRecord::warn(format!(
                    "{PROJECT_FILE} contains config options, so {LEGACY_CONFIG_FILE} will be \
                     ignored. Move any remaining settings from {LEGACY_CONFIG_FILE} into \
                     {PROJECT_FILE} or {INVENTORY_FILE}."
                )));
            }
            project_file.clone()
        } else {
            legacy_config_file.clone()
        };

        if has_project_file {
            let warnings = validate_settings(&settings)?;
            logs.extend(warnings.into_iter().map(LogRecord::warn));
        }

        Ok(Self {
            inventory_file: path.join(INVENTORY_FILE),
            modulepath: MODULE_DIRS.iter().map(|dir| path.join(dir)).collect(),
            hiera_config: path.join(HIERA_CONFIG),
            rigfile: path.join(RIGFILE),
            rerun_file: path.join(RERUN_FILE),
            resource_types: path.join(RESOURCE_TYPES_DIR),
            downloads: path.join(DOWNLOADS_DIR),
            plans_path: path.join(PLANS_DIR),
            managed_moduledir: path.join(MANAGED_MODULE_DIR),
            path,
            kind,
            settings,
            project_file,
            legacy_config_file,
            config_file,
            logs,
            deprecations,
        })
    }

    /// Re-run validation over the stored settings and return its warnings.
    pub fn validate(&self) -> ProjectResult<Vec<String>> {
        Ok(validate_settings(&self.settings)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    pub fn settings(&self) -> &toml::Table {
        &self.settings
    }

    /// `rig-project.toml`, whether or not it exists.
    pub fn project_file(&self) -> &Path {
        &self.project_file
    }

    pub fn project_file_exists(&self) -> bool {
        self.project_file.is_file()
    }

    /// `rig.toml`, whether or not it exists.
    pub fn legacy_config_file(&self) -> &Path {
        &self.legacy_config_file
    }

    /// The file tool options are read from: `rig-project.toml` when it sets
    /// any tool option, otherwise `rig.toml`.
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn inventory_file(&self) -> &Path {
        &self.inventory_file
    }

    pub fn modulepath(&self) -> &[PathBuf] {
        &self.modulepath
    }

    pub fn hiera_config(&self) -> &Path {
        &self.hiera_config
    }

    pub fn rigfile(&self) -> &Path {
        &self.rigfile
    }

    pub fn rerun_file(&self) -> &Path {
        &self.rerun_file
    }

    pub fn resource_types(&self) -> &Path {
        &self.resource_types
    }

    pub fn downloads(&self) -> &Path {
        &self.downloads
    }

    pub fn plans_path(&self) -> &Path {
        &self.plans_path
    }

    pub fn managed_moduledir(&self) -> &Path {
        &self.managed_moduledir
    }

    pub fn logs(&self) -> &[LogRecord] {
        &self.logs
    }

    pub fn deprecations(&self) -> &[Deprecation] {
        &self.deprecations
    }

    pub fn name(&self) -> Option<&str> {
        self.settings.get("name").and_then(toml::Value::as_str)
    }

    /// The project is loaded as a module only when it is named.
    pub fn load_as_module(&self) -> bool {
        self.name().is_some()
    }

    pub fn tasks(&self) -> Option<Vec<&str>> {
        self.string_list("tasks")
    }

    pub fn plans(&self) -> Option<Vec<&str>> {
        self.string_list("plans")
    }

    /// Declared module dependencies. Entries without a string name are
    /// skipped; validation rejects them when the project file exists.
    pub fn modules(&self) -> Vec<ModuleDeclaration> {
        let Some(entries) = self.settings.get("modules").and_then(toml::Value::as_array) else {
            return Vec::new();
        };
        entries
            .iter()
            .filter_map(toml::Value::as_table)
            .filter_map(|entry| {
                let name = entry.get("name")?.as_str()?.to_string();
                let version_requirement = entry
                    .get("version_requirement")
                    .and_then(toml::Value::as_str)
                    .map(str::to_string);
                Some(ModuleDeclaration {
                    name,
                    version_requirement,
                })
            })
            .collect()
    }

    fn string_list(&self, key: &str) -> Option<Vec<&str>> {
        let values = self.settings.get(key)?.as_array()?;
        Some(values.iter().filter_map(toml::Value::as_str).collect())
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Project {}

impl Hash for Project {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
