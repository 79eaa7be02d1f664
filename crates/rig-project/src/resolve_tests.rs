use super::*;
use crate::log::Severity;
use tempfile::{TempDir, tempdir};

/// Resolver whose defaults live inside `temp`, isolated from the host's
/// real `~/.config/rig`.
fn isolated_resolver(temp: &TempDir) -> ProjectResolver {
    ProjectResolver::with_default_dirs(
        Some(temp.path().join("home").join("rig")),
        temp.path().join("etc").join("rig"),
    )
}

fn nested(root: &Path) -> PathBuf {
    let leaf = root.join("a").join("b").join("c");
    std::fs::create_dir_all(&leaf).unwrap();
    leaf
}

#[test]
fn marker_dir_in_ancestor_is_embedded_project() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    let leaf = nested(&repo);
    std::fs::create_dir(repo.join("Rigdir")).unwrap();

    let project = isolated_resolver(&temp)
        .find_project_dir(&leaf, Vec::new())
        .unwrap();
    assert_eq!(project.path(), repo.join("Rigdir"));
    assert_eq!(project.kind(), ProjectKind::Embedded);
}

#[test]
fn marker_dir_wins_over_settings_file_in_same_dir() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    std::fs::create_dir_all(repo.join("Rigdir")).unwrap();
    std::fs::write(repo.join("rig.toml"), "").unwrap();

    let project = isolated_resolver(&temp)
        .find_project_dir(&repo, Vec::new())
        .unwrap();
    assert_eq!(project.kind(), ProjectKind::Embedded);
}

#[test]
fn legacy_settings_file_marks_local_project() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    let leaf = nested(&repo);
    std::fs::write(repo.join("rig.toml"), "concurrency = 4\n").unwrap();

    let project = isolated_resolver(&temp)
        .find_project_dir(&leaf, Vec::new())
        .unwrap();
    assert_eq!(project.path(), repo);
    assert_eq!(project.kind(), ProjectKind::Local);
}

#[test]
fn project_file_marks_local_project() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    let leaf = nested(&repo);
    std::fs::write(repo.join("rig-project.toml"), "name = \"site\"\n").unwrap();

    let project = isolated_resolver(&temp)
        .find_project_dir(&leaf, Vec::new())
        .unwrap();
    assert_eq!(project.path(), repo);
    assert_eq!(project.name(), Some("site"));
}

#[test]
fn settings_file_as_directory_is_not_a_marker() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    std::fs::create_dir_all(repo.join("rig.toml")).unwrap();

    let project = isolated_resolver(&temp)
        .find_project_dir(&repo, Vec::new())
        .unwrap();
    assert_ne!(project.path(), repo);
}

#[test]
fn closest_marker_wins() {
    let temp = tempdir().unwrap();
    let outer = temp.path().join("outer");
    let inner = outer.join("inner");
    let leaf = nested(&inner);
    std::fs::create_dir(outer.join("Rigdir")).unwrap();
    std::fs::write(inner.join("rig-project.toml"), "name = \"inner\"\n").unwrap();

    let project = isolated_resolver(&temp)
        .find_project_dir(&leaf, Vec::new())
        .unwrap();
    assert_eq!(project.path(), inner);
    assert_eq!(project.kind(), ProjectKind::Local);
}

#[test]
fn unmarked_directories_are_logged_in_order() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    let leaf = nested(&repo);
    std::fs::create_dir(repo.join("Rigdir")).unwrap();

    let project = isolated_resolver(&temp)
        .find_project_dir(&leaf, Vec::new())
        .unwrap();
    let checked: Vec<&str> = project
        .logs()
        .iter()
        .filter(|record| record.level == Severity::Debug)
        .map(|record| record.message.as_str())
        .collect();
    assert_eq!(checked.len(), 3);
    assert!(checked[0].contains(&format!("'{}'", leaf.display())));
    assert!(checked[2].contains(&format!("'{}'", repo.join("a").display())));
    assert!(checked[0].ends_with("This directory won't be loaded as a project."));
}

#[test]
fn relative_start_is_resolved_from_cwd() {
    let temp = tempdir().unwrap();
    let resolver = isolated_resolver(&temp);
    let from_relative = resolver.find_project_dir(Path::new("."), Vec::new()).unwrap();
    let from_absolute = resolver
        .find_project_dir(&std::env::current_dir().unwrap(), Vec::new())
        .unwrap();
    assert_eq!(from_relative, from_absolute);
}

#[test]
fn walk_from_root_falls_back_to_user_default() {
    let temp = tempdir().unwrap();
    let resolver = isolated_resolver(&temp);
    let root = temp
        .path()
        .ancestors()
        .last()
        .map(Path::to_path_buf)
        .unwrap();
    // Only meaningful when the filesystem root itself is not a project.
    if root.join("Rigdir").is_dir()
        || root.join("rig.toml").is_file()
        || root.join("rig-project.toml").is_file()
    {
        return;
    }

    let project = resolver.find_project_dir(&root, Vec::new()).unwrap();
    assert_eq!(project.kind(), ProjectKind::User);
    assert_eq!(project.path(), temp.path().join("home").join("rig"));
    assert!(project.path().is_dir(), "user default project is created");
    assert!(
        project
            .logs()
            .iter()
            .all(|record| record.level != Severity::Debug),
        "root itself is never logged as unmarked"
    );
}

#[test]
fn default_location_prefers_user_dir() {
    let temp = tempdir().unwrap();
    let resolver = isolated_resolver(&temp);
    assert_eq!(
        resolver.default_location(),
        (temp.path().join("home").join("rig"), ProjectKind::User)
    );
}

#[test]
fn default_location_without_home_uses_system_dir() {
    let temp = tempdir().unwrap();
    let resolver = ProjectResolver::with_default_dirs(None, temp.path().join("etc").join("rig"));
    assert_eq!(
        resolver.default_location(),
        (temp.path().join("etc").join("rig"), ProjectKind::System)
    );

    let project = resolver.default_project(Vec::new()).unwrap();
    assert_eq!(project.kind(), ProjectKind::System);
    assert!(
        !project.path().exists(),
        "system default project is never created"
    );
}

#[test]
fn default_project_keeps_earlier_logs() {
    let temp = tempdir().unwrap();
    let project = isolated_resolver(&temp)
        .default_project(vec![LogRecord::debug("walked")])
        .unwrap();
    assert_eq!(project.logs()[0], LogRecord::debug("walked"));
}

#[test]
fn resolve_prefers_explicit_option() {
    let temp = tempdir().unwrap();
    let explicit = temp.path().join("explicit");
    let from_env = temp.path().join("from-env");
    std::fs::create_dir_all(&explicit).unwrap();
    std::fs::create_dir_all(&from_env).unwrap();

    let project = isolated_resolver(&temp)
        .resolve(Some(explicit.as_path()), Some(from_env.as_path()), temp.path())
        .unwrap();
    assert_eq!(project.path(), explicit);
    assert_eq!(project.kind(), ProjectKind::Option);
}

#[test]
fn resolve_missing_option_is_not_found() {
    let temp = tempdir().unwrap();
    let err = isolated_resolver(&temp)
        .resolve(Some(temp.path().join("missing").as_path()), None, temp.path())
        .unwrap_err();
    assert_eq!(err.kind(), "rig/project-error");
}

#[test]
fn resolve_uses_environment_path() {
    let temp = tempdir().unwrap();
    let from_env = temp.path().join("from-env");
    std::fs::create_dir_all(&from_env).unwrap();

    let project = isolated_resolver(&temp)
        .resolve(None, Some(from_env.as_path()), temp.path())
        .unwrap();
    assert_eq!(project.path(), from_env);
    assert_eq!(project.kind(), ProjectKind::Environment);
}

#[test]
fn resolve_ignores_empty_environment_value() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    std::fs::create_dir_all(repo.join("Rigdir")).unwrap();

    let project = isolated_resolver(&temp)
        .resolve(None, Some(Path::new("")), &repo)
        .unwrap();
    assert_eq!(project.kind(), ProjectKind::Embedded);
}

#[test]
fn resolve_searches_from_cwd_without_overrides() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    let leaf = nested(&repo);
    std::fs::write(repo.join("rig.toml"), "").unwrap();

    let project = isolated_resolver(&temp).resolve(None, None, &leaf).unwrap();
    assert_eq!(project.path(), repo);
    assert_eq!(project.kind(), ProjectKind::Local);
}

#[cfg(unix)]
#[test]
fn resolve_environment_path_may_be_world_writable() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().unwrap();
    let shared = temp.path().join("shared");
    std::fs::create_dir(&shared).unwrap();
    std::fs::set_permissions(&shared, std::fs::Permissions::from_mode(0o777)).unwrap();

    let resolver = isolated_resolver(&temp);
    assert!(resolver.resolve(Some(shared.as_path()), None, temp.path()).is_err());
    let project = resolver.resolve(None, Some(shared.as_path()), temp.path()).unwrap();
    assert_eq!(project.kind(), ProjectKind::Environment);
}
