//! Executable lookup across the search path.

use std::path::{Path, PathBuf};

use super::search_path::SearchPath;
use crate::error::{ProbeError, Result};

/// Resolve `name` to the first matching executable on `search_path`.
///
/// Delegates to the `which` crate so that `PATHEXT` is honoured on Windows
/// and non-executable files are skipped on Unix. `cwd` is only consulted
/// for names containing a path separator.
pub fn resolve_executable(name: &str, search_path: &SearchPath, cwd: &Path) -> Result<PathBuf> {
    let paths = search_path
        .to_os_string()
        .ok_or_else(|| ProbeError::ExecutableNotFound {
            name: name.to_string(),
            message: "search path contains an entry with a path separator".to_string(),
        })?;

    which::which_in(name, Some(paths), cwd).map_err(|e| ProbeError::ExecutableNotFound {
        name: name.to_string(),
        message: e.to_string(),
    })
}
