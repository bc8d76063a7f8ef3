use std::path::PathBuf;

use thiserror::Error;

use crate::config;

/// Configuration-tier failures. Every variant is detected before any
/// hashing starts and aborts the whole run with its exit code.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown hash algorithm '{name}' (expected sha256, sha384 or sha512)")]
    UnknownAlgorithm { name: String },

    #[error("directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot read directory '{}': {reason}", path.display())]
    DirectoryUnreadable { path: PathBuf, reason: String },

    #[error("filter pattern must not be blank")]
    BlankFilter,

    #[error("invalid filter pattern '{pattern}': {reason}")]
    InvalidFilter { pattern: String, reason: String },

    #[error("invalid size '{value}': {reason}")]
    InvalidSize { value: String, reason: String },

    #[error("no file or directory specified")]
    NoInput,

    #[error("{count} files resolved, exceeding the limit of {limit} (use --max-files to raise it)")]
    TooManyFiles { count: usize, limit: usize },
}

impl ConfigError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::UnknownAlgorithm { .. } => config::EXIT_BAD_ALGORITHM,
            ConfigError::DirectoryNotFound { .. }
            | ConfigError::NotADirectory { .. }
            | ConfigError::DirectoryUnreadable { .. } => config::EXIT_NOT_FOUND,
            ConfigError::BlankFilter
            | ConfigError::InvalidFilter { .. }
            | ConfigError::InvalidSize { .. }
            | ConfigError::NoInput
            | ConfigError::TooManyFiles { .. } => config::EXIT_USAGE,
        }
    }
}
