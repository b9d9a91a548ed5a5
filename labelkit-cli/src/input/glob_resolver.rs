//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::path::{Path, PathBuf};

/// Resolve file patterns to actual file paths.
///
/// Each pattern is expanded with glob; a pattern that expands to nothing
/// but names an existing file literally (label files occasionally contain
/// `[` and `]`) is taken as that file. The result is sorted and
/// de-duplicated; resolving to zero files is an error.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let mut matched = false;

        let paths =
            glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.to_string()))?;
        for path_result in paths {
            let path =
                path_result.map_err(|_| CliError::InvalidPattern(pattern.to_string()))?;
            if path.is_file() {
                files.push(path);
                matched = true;
            }
        }

        if !matched {
            let literal = Path::new(pattern);
            if literal.is_file() {
                files.push(literal.to_path_buf());
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInputFiles.into());
    }

    files.sort();
    files.dedup();

    Ok(files)
}
