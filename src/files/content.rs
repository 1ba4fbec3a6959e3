//! Lenient text loading and candidate-path resolution.
//!
//! Transcript exports come from phones and messaging apps, so the bytes are
//! not guaranteed to be valid UTF-8. All text inputs go through [`read_lossy`],
//! which substitutes invalid sequences instead of failing the whole read.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read a whole file as text, replacing invalid UTF-8 sequences.
pub fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Resolve a possibly-relative path against a list of candidate locations.
///
/// Tries the path as given first, then relative to `base_dir` if provided.
/// Returns the first candidate that exists. If none exists, the original path
/// is returned unchanged so that the eventual open error names exactly what
/// the user typed.
pub fn resolve(path: &Path, base_dir: Option<&Path>) -> PathBuf {
    if path.exists() {
        return path.to_path_buf();
    }

    if path.is_relative() {
        if let Some(base) = base_dir {
            let candidate = base.join(path);
            if candidate.exists() {
                return candidate;
            }
        }
    }

    path.to_path_buf()
}
