//! Capability-based access to the files the runner hands us.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::github::ActionError;

/// Opens the directory containing `path` and returns it with the file name.
///
/// `purpose` names the file in error messages (for example "event payload").
pub(crate) fn open_parent<'path>(
    path: &'path Utf8Path,
    purpose: &str,
) -> Result<(Dir, &'path str), ActionError> {
    let file_name = path.file_name().ok_or_else(|| ActionError::Io {
        message: format!("invalid {purpose} path '{path}': no file name"),
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        ActionError::Io {
            message: format!("failed to open {purpose} directory '{parent}': {error}"),
        }
    })?;
    Ok((dir, file_name))
}

/// Reads a whole UTF-8 file.
pub(crate) fn read_to_string(path: &Utf8Path, purpose: &str) -> Result<String, ActionError> {
    let (dir, file_name) = open_parent(path, purpose)?;
    dir.read_to_string(file_name)
        .map_err(|error| ActionError::Io {
            message: format!("failed to read {purpose} '{path}': {error}"),
        })
}
