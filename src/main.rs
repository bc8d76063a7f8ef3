use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use srisum::cli::Cli;
use srisum::config::{self, Config, OutputFormat};
use srisum::error::ConfigError;
use srisum::output::{self, OutputStyle};
use srisum::processor;
use srisum::resolver;
use srisum::signal;

fn main() {
    if let Err(e) = signal::install_handlers() {
        eprintln!("srisum: failed to install signal handlers: {}", e);
    }

    // Help and version render through clap's error path and exit 0; real
    // parse errors take the usage exit code.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => config::EXIT_OK,
                _ => config::EXIT_USAGE,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(e) => exit_config_error(e),
    };

    let paths = match resolver::resolve_paths(&config) {
        Ok(paths) => paths,
        Err(e) => exit_config_error(e),
    };

    process::exit(run(&config, &paths));
}

fn exit_config_error(err: ConfigError) -> ! {
    eprintln!("srisum: {}", err);
    if matches!(err, ConfigError::NoInput) {
        eprintln!("{}", Cli::command().render_usage());
    }
    process::exit(err.exit_code())
}

/// Hash every resolved path in order and emit one result line each.
/// Per-file failures are part of normal output; only a failure to write
/// the output itself is fatal here.
fn run(config: &Config, paths: &[PathBuf]) -> i32 {
    let style = match config.output_format {
        OutputFormat::Text => OutputStyle::detect(),
        _ => OutputStyle::plain(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut results = Vec::with_capacity(paths.len());
    for path in paths {
        let result = processor::process_file(path, config);
        if config.output_format == OutputFormat::Text {
            if let Err(e) = output::print_text_result(&mut out, &result, &style) {
                return exit_output_failed(e);
            }
        }
        results.push(result);
    }

    if config.output_format != OutputFormat::Text {
        if let Err(e) = output::write_results(&mut out, &results, config.output_format) {
            return exit_output_failed(e);
        }
    }

    if let Err(e) = out.flush() {
        return exit_output_failed(e);
    }

    config::EXIT_OK
}

fn exit_output_failed(err: io::Error) -> i32 {
    eprintln!("srisum: failed to write results: {}", err);
    config::EXIT_OUTPUT_FAILED
}
