use clap::Parser;
use std::path::PathBuf;

use srisum::cli::Cli;
use srisum::config::{
    Algorithm, OutputFormat, DEFAULT_MAX_FILES, EXIT_BAD_ALGORITHM, EXIT_USAGE,
};
use srisum::error::ConfigError;

#[test]
fn test_cli_defaults() {
    let args = vec!["srisum"];
    let cli = Cli::parse_from(args);

    assert!(cli.file.is_empty());
    assert!(cli.files.is_empty());
    assert!(cli.directory.is_none());
    assert_eq!(cli.filter, "*");
    assert_eq!(cli.algorithm, "sha384");
    assert_eq!(cli.max_files, DEFAULT_MAX_FILES);
    assert!(!cli.json);
    assert!(!cli.yaml);
    assert_eq!(cli.get_output_format(), OutputFormat::Text);
}

#[test]
fn test_cli_repeated_and_comma_delimited_files() {
    let args = vec!["srisum", "-f", "a.js", "--file", "b.css,c.css"];
    let cli = Cli::parse_from(args);

    assert_eq!(
        cli.file,
        vec![
            PathBuf::from("a.js"),
            PathBuf::from("b.css"),
            PathBuf::from("c.css")
        ]
    );
}

#[test]
fn test_cli_positional_files_follow_file_options() {
    let args = vec!["srisum", "-f", "a.js", "x.txt", "y.txt"];
    let cli = Cli::parse_from(args);
    let config = cli.to_config().unwrap();

    assert_eq!(
        config.files,
        vec![
            PathBuf::from("a.js"),
            PathBuf::from("x.txt"),
            PathBuf::from("y.txt")
        ]
    );
}

#[test]
fn test_cli_algorithm_selection() {
    let args = vec!["srisum", "-a", "sha256", "-f", "a.js"];
    let cli = Cli::parse_from(args);
    let config = cli.to_config().unwrap();

    assert_eq!(config.algorithm, Algorithm::Sha256);
}

#[test]
fn test_cli_default_algorithm_is_sha384() {
    let args = vec!["srisum", "-f", "a.js"];
    let config = Cli::parse_from(args).to_config().unwrap();

    assert_eq!(config.algorithm, Algorithm::Sha384);
}

#[test]
fn test_cli_unknown_algorithm_is_rejected() {
    let args = vec!["srisum", "-a", "sha1", "-f", "a.js"];
    let err = Cli::parse_from(args).to_config().unwrap_err();

    assert!(matches!(err, ConfigError::UnknownAlgorithm { .. }));
    assert_eq!(err.exit_code(), EXIT_BAD_ALGORITHM);
}

#[test]
fn test_cli_no_input_is_rejected() {
    let args = vec!["srisum"];
    let err = Cli::parse_from(args).to_config().unwrap_err();

    assert!(matches!(err, ConfigError::NoInput));
    assert_eq!(err.exit_code(), EXIT_USAGE);
}

#[test]
fn test_cli_directory_alone_is_enough() {
    let args = vec!["srisum", "-d", "assets"];
    let config = Cli::parse_from(args).to_config().unwrap();

    assert_eq!(config.directory, Some(PathBuf::from("assets")));
    assert!(config.files.is_empty());
}

#[test]
fn test_cli_blank_filter_is_rejected() {
    let args = vec!["srisum", "-d", "assets", "--filter", "  "];
    let err = Cli::parse_from(args).to_config().unwrap_err();

    assert!(matches!(err, ConfigError::BlankFilter));
    assert_eq!(err.exit_code(), EXIT_USAGE);
}

#[test]
fn test_cli_output_format() {
    let args = vec!["srisum", "--json", "-f", "a.js"];
    let cli = Cli::parse_from(args);
    assert_eq!(cli.get_output_format(), OutputFormat::Json);

    let args = vec!["srisum", "--yaml", "-f", "a.js"];
    let cli = Cli::parse_from(args);
    assert_eq!(cli.get_output_format(), OutputFormat::Yaml);
}

#[test]
fn test_cli_max_file_size() {
    let args = vec!["srisum", "--max-file-size", "500M", "-f", "a.js"];
    let config = Cli::parse_from(args).to_config().unwrap();

    assert_eq!(config.max_file_size, 500 * 1024 * 1024);
}

#[test]
fn test_cli_max_files() {
    let args = vec!["srisum", "--max-files", "500", "-f", "a.js"];
    let cli = Cli::parse_from(args);

    assert_eq!(cli.max_files, 500);
}
