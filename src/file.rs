// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::params::DEFAULT_OUT_FILE;

/// Resolve the report output path from the user's `-o` (if any).
/// A directory (existing, or hinted with a trailing separator) gets the
/// default filename appended.
pub fn resolve_out_path(out: Option<&Path>) -> PathBuf {
    let Some(p) = out else {
        return PathBuf::from(DEFAULT_OUT_FILE);
    };
    if p.is_dir() || looks_like_dir_hint(p) {
        p.join(DEFAULT_OUT_FILE)
    } else {
        p.to_path_buf()
    }
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write the rendered report, creating parent directories as needed.
/// Returns the path actually written.
pub fn write_report(path: &Path, html: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, html)?;
    Ok(path.to_path_buf())
}
