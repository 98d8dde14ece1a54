//! Shared helpers reused across modules (e.g., path resolution).

use std::path::{Path, PathBuf};

/// Returns true if the path has no components at all.
pub fn is_empty(path: &Path) -> bool {
    path.as_os_str().is_empty()
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    base.join(path)
}

/// Directory that relative paths inside a config file are resolved against.
pub fn config_base_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !is_empty(parent) => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
