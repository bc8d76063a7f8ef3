use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::config::Config;
use crate::error::ConfigError;

// ============================================================================
// Path Resolution
// ============================================================================

/// Build the effective path set: explicit files first, in the order given,
/// then directory entries matching the filter in lexical order. Explicit
/// paths are kept exactly as supplied and never glob-expanded; a path named
/// by both sources is kept twice.
pub fn resolve_paths(config: &Config) -> Result<Vec<PathBuf>, ConfigError> {
    let mut paths = config.files.clone();

    if let Some(dir) = &config.directory {
        paths.extend(scan_directory(dir, &config.filter)?);
    }

    if paths.len() > config.max_files {
        return Err(ConfigError::TooManyFiles {
            count: paths.len(),
            limit: config.max_files,
        });
    }

    Ok(paths)
}

/// List the immediate entries of `dir` whose name matches `filter`, sorted
/// lexically. Subdirectories that match are kept; hashing reports them as
/// unreadable later.
fn scan_directory(dir: &Path, filter: &str) -> Result<Vec<PathBuf>, ConfigError> {
    let metadata = fs::metadata(dir).map_err(|_| ConfigError::DirectoryNotFound {
        path: dir.to_path_buf(),
    })?;
    if !metadata.is_dir() {
        return Err(ConfigError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let pattern = Pattern::new(filter).map_err(|e| ConfigError::InvalidFilter {
        pattern: filter.to_string(),
        reason: e.to_string(),
    })?;

    let entries = fs::read_dir(dir).map_err(|e| ConfigError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut matched = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name();
        if pattern.matches(&name.to_string_lossy()) {
            matched.push(entry.path());
        }
    }

    // read_dir order is platform-dependent
    matched.sort();

    Ok(matched)
}
