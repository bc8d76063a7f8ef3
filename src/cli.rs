use clap::Parser;
use std::path::PathBuf;

use crate::config::{self, Config};
use crate::error::ConfigError;
use crate::util;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    next_line_help = false
)]
pub struct Cli {
    /// Files to hash (repeatable, comma-delimited)
    #[arg(short = 'f', long = "file", value_name = "PATH", value_delimiter = ',', next_line_help = false)]
    pub file: Vec<PathBuf>,

    /// Directory whose immediate entries are hashed
    #[arg(short = 'd', long = "directory", value_name = "PATH", next_line_help = false)]
    pub directory: Option<PathBuf>,

    /// Glob restricting which directory entries are hashed [default: *]
    #[arg(long = "filter", value_name = "GLOB", default_value_t = String::from(config::DEFAULT_FILTER), next_line_help = false, hide_default_value = true)]
    pub filter: String,

    /// Hash algorithm: sha256, sha384 or sha512 [default: sha384]
    #[arg(short = 'a', long = "algorithm", value_name = "NAME", default_value_t = String::from(config::DEFAULT_ALGORITHM), next_line_help = false, hide_default_value = true)]
    pub algorithm: String,

    /// Maximum file size (e.g., 1G, 512M) [default: 10G]
    #[arg(long = "max-file-size", default_value_t = String::from(config::DEFAULT_MAX_FILE_SIZE_STR), next_line_help = false, hide_default_value = true)]
    pub max_file_size: String,

    /// Maximum number of files to process [default: 10000]
    #[arg(long = "max-files", default_value_t = config::DEFAULT_MAX_FILES, next_line_help = false, hide_default_value = true)]
    pub max_files: usize,

    /// Output results in JSON format
    #[arg(long = "json", conflicts_with = "yaml", next_line_help = false)]
    pub json: bool,

    /// Output results in YAML format
    #[arg(long = "yaml", conflicts_with = "json", next_line_help = false)]
    pub yaml: bool,

    /// Additional files to hash
    #[arg(value_name = "FILE", next_line_help = false)]
    pub files: Vec<PathBuf>,
}

impl Cli {
    pub fn get_output_format(&self) -> config::OutputFormat {
        if self.json {
            config::OutputFormat::Json
        } else if self.yaml {
            config::OutputFormat::Yaml
        } else {
            config::OutputFormat::Text
        }
    }

    /// Validate the arguments into a run configuration.
    ///
    /// The algorithm name is checked first so a bad name fails before any
    /// other diagnostics. Positional files are appended after `--file` paths,
    /// preserving the order each list was given in.
    pub fn to_config(&self) -> Result<Config, ConfigError> {
        let algorithm = config::Algorithm::from_name(&self.algorithm)?;
        let max_file_size = util::parse_size(&self.max_file_size)?;

        if self.filter.trim().is_empty() {
            return Err(ConfigError::BlankFilter);
        }

        let mut files = self.file.clone();
        files.extend(self.files.iter().cloned());

        if files.is_empty() && self.directory.is_none() {
            return Err(ConfigError::NoInput);
        }

        Ok(Config {
            algorithm,
            files,
            directory: self.directory.clone(),
            filter: self.filter.clone(),
            output_format: self.get_output_format(),
            max_file_size,
            max_files: self.max_files,
        })
    }
}
