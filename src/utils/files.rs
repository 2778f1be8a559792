//! Input discovery and output naming for batch conversion
//!
//! The batch loop works on a source directory and a filename glob; this
//! module finds the matching files and derives the destination path for
//! each converted table.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::utils::error::ConversionResult;

/// Find input files under `input` matching the filename glob `pattern`
///
/// If `input` is a regular file it is returned as the single entry,
/// bypassing the pattern. Directory entries that are not regular files are
/// skipped. Results are sorted by path so batch output order is
/// deterministic.
pub fn discover_inputs(input: &Path, pattern: &str) -> ConversionResult<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let matcher = Pattern::new(pattern)?;

    let mut files = Vec::new();
    for entry in fs::read_dir(input)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => continue,
        };
        if matcher.matches(name) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Derive the destination path for an input file: `<out_dir>/<stem>.tex`
pub fn output_path(out_dir: &Path, input: &Path) -> PathBuf {
    let stem = file_stem(input);
    out_dir.join(format!("{}.tex", stem))
}

/// Base name of a path without its extension
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("table")
        .to_string()
}

/// File name of a path including its extension
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("table.csv")
        .to_string()
}
