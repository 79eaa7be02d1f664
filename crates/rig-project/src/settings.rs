use std::path::Path;

use rig_core::{ProjectError, ProjectResult};

/// Read a TOML settings file as a table.
///
/// A missing file yields an empty table. Unreadable files and malformed
/// content are errors carrying the path.
pub fn read_optional_table(path: &Path) -> ProjectResult<toml::Table> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if is_missing(&err) => return Ok(toml::Table::new()),
        Err(source) => {
            return Err(ProjectError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str::<toml::Table>(&content).map_err(|source| ProjectError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// A parent that is not a directory also means the file is absent.
fn is_missing(err: &std::io::Error) -> bool {
    matches!(
        err.kind(),
        std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
    )
}
