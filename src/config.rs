use std::fmt;
use std::path::PathBuf;

use crate::error::ConfigError;

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for file reads (64KB)
pub const BUFFER_SIZE: usize = 65536;
/// Default directory filter, matches every entry
pub const DEFAULT_FILTER: &str = "*";
/// Default digest algorithm for integrity attributes
pub const DEFAULT_ALGORITHM: &str = "sha384";
/// Default maximum file size (10GB) - prevents DoS via large files
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024 * 1024;
/// Human-readable form of the default maximum file size
pub const DEFAULT_MAX_FILE_SIZE_STR: &str = "10G";
/// Default maximum number of files - prevents DoS via many files
pub const DEFAULT_MAX_FILES: usize = 10000;

// ============================================================================
// Exit Codes
// ============================================================================

/// Run completed; per-file failures were reported inline
pub const EXIT_OK: i32 = 0;
/// Argument or configuration error
pub const EXIT_USAGE: i32 = 1;
/// Unknown digest algorithm
pub const EXIT_BAD_ALGORITHM: i32 = 2;
/// Specified directory does not exist
pub const EXIT_NOT_FOUND: i32 = 3;
/// Emitting results failed
pub const EXIT_OUTPUT_FAILED: i32 = 4;
/// Terminated by signal
pub const EXIT_INTERRUPTED: i32 = 99;

// ============================================================================
// Algorithm Selection
// ============================================================================

/// Digest algorithms valid in an `integrity` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    /// Parse an algorithm name. Unrecognized names are a configuration
    /// error, never a fallback to the default.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "sha256" => Ok(Algorithm::Sha256),
            "sha384" => Ok(Algorithm::Sha384),
            "sha512" => Ok(Algorithm::Sha512),
            _ => Err(ConfigError::UnknownAlgorithm {
                name: name.to_string(),
            }),
        }
    }

    /// Label used as the digest prefix in the output line.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Raw digest length in bytes, before base64 encoding.
    pub fn digest_len(&self) -> usize {
        match self {
            Algorithm::Sha256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Configuration Structures
// ============================================================================

/// Fully validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Selected digest algorithm
    pub algorithm: Algorithm,
    /// Explicit files, in the order given
    pub files: Vec<PathBuf>,
    /// Directory whose immediate entries are scanned
    pub directory: Option<PathBuf>,
    /// Glob restricting the directory scan
    pub filter: String,
    /// Output format (text, JSON, or YAML)
    pub output_format: OutputFormat,
    /// Maximum allowed size for individual files
    pub max_file_size: u64,
    /// Maximum number of files to process
    pub max_files: usize,
}

/// Available output formats for results
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Sha384,
            files: Vec::new(),
            directory: None,
            filter: DEFAULT_FILTER.to_string(),
            output_format: OutputFormat::Text,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for (name, len) in [("sha256", 32), ("sha384", 48), ("sha512", 64)] {
            let algorithm = Algorithm::from_name(name).unwrap();
            assert_eq!(algorithm.label(), name);
            assert_eq!(algorithm.digest_len(), len);
        }
    }

    #[test]
    fn algorithm_names_are_case_insensitive() {
        assert_eq!(Algorithm::from_name("SHA256").unwrap(), Algorithm::Sha256);
        assert_eq!(Algorithm::from_name("Sha512").unwrap(), Algorithm::Sha512);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert!(Algorithm::from_name("sha1").is_err());
        assert!(Algorithm::from_name("md5").is_err());
        assert!(Algorithm::from_name("").is_err());
    }
}
