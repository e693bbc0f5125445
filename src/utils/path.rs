//! Path utilities: expand ~ and derive sibling files of the data file.

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

/// A `--file` value as an absolute path: `~/` expanded, relative paths taken
/// from the current directory.
pub fn resolve_data_file(file: &str) -> io::Result<PathBuf> {
    std::path::absolute(expand_tilde(file))
}

/// `dir/name.ext` → `dir/name.<suffix>`, keeping the data file's stem.
pub fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "maintenance_log".to_string());
    path.with_file_name(format!("{stem}.{suffix}"))
}
