//! Path utilities: expand ~, resolve relative database paths, create parents.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve a user-supplied database path: `~/` is expanded, absolute paths are
/// kept, anything else is taken relative to `base_dir`.
pub fn resolve_against(path: &str, base_dir: &Path) -> PathBuf {
    let p = expand_tilde(path);
    if p.is_absolute() { p } else { base_dir.join(p) }
}

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
