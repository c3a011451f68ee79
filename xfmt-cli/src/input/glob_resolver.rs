//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to existing files, in pattern order
///
/// Matches of a single pattern are sorted (as `glob` yields them); a file
/// matched by more than one pattern is kept at its first position only.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|e| {
            CliError::InvalidPattern(format!("{pattern} ({})", e.msg))
        })?;

        let before = files.len();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() && !files.contains(&path) {
                files.push(path);
            }
        }

        if files.len() == before {
            log::warn!("Pattern matched no files: {pattern}");
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    log::debug!("Resolved {} input file(s)", files.len());
    Ok(files)
}
