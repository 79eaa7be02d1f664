//! Known top-level keys and how project loading treats them.

/// General tool options. These are valid in both `rig.toml` and
/// `rig-project.toml`; their presence in the project file makes it the
/// canonical config file.
pub const TOOL_OPTIONS: &[&str] = &[
    "apply-settings",
    "color",
    "compile-concurrency",
    "concurrency",
    "format",
    "hiera-config",
    "inventoryfile",
    "log",
    "modulepath",
    "plugin-hooks",
    "plugins",
    "rigfile",
    "save-rerun",
    "spinner",
    "trusted-external-command",
];

/// Transport settings. They belong in `inventory.toml` and are stripped from
/// project settings.
pub const TRANSPORT_OPTIONS: &[&str] = &["transport", "docker", "local", "remote", "ssh", "winrm"];

/// Project-only settings and what they control.
pub const PROJECT_SETTINGS: &[(&str, &str)] = &[
    ("name", "The name of the project"),
    (
        "tasks",
        "An array of task names to allow. Allowed tasks are included in `rig task show` output",
    ),
    (
        "plans",
        "An array of plan names to allow. Allowed plans are included in `rig plan show` output",
    ),
    (
        "modules",
        "An array of module declarations, each a table with a name and an optional \
         version_requirement",
    ),
];

/// Modules shipped with rig. A project cannot take one of these names.
pub const BUILTIN_MODULES: &[&str] = &["riglib", "ctrl", "dir", "file", "out", "prompt", "system"];

/// Keys accepted inside a `modules` entry.
pub const MODULE_DECLARATION_KEYS: &[&str] = &["name", "version_requirement"];

pub fn is_tool_option(key: &str) -> bool {
    TOOL_OPTIONS.contains(&key)
}

pub fn is_transport_option(key: &str) -> bool {
    TRANSPORT_OPTIONS.contains(&key)
}

pub fn is_builtin_module(name: &str) -> bool {
    BUILTIN_MODULES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_tables_are_disjoint() {
        for key in TRANSPORT_OPTIONS {
            assert!(!is_tool_option(key), "{key} is listed twice");
        }
        for (key, _) in PROJECT_SETTINGS {
            assert!(!is_tool_option(key), "{key} is listed twice");
            assert!(!is_transport_option(key), "{key} is listed twice");
        }
    }

    #[test]
    fn builtin_module_lookup() {
        assert!(is_builtin_module("ctrl"));
        assert!(!is_builtin_module("site_tools"));
    }
}
