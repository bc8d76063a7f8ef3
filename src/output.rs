use std::io::{self, IsTerminal, Write};
use std::path::Path;

use colored::Colorize;

use crate::config::OutputFormat;
use crate::processor::{HashResult, Outcome};

// ============================================================================
// Output Style
// ============================================================================

/// Output styling, resolved once at startup and passed explicitly to the
/// formatter. No process-wide color state.
#[derive(Debug, Clone, Copy)]
pub struct OutputStyle {
    pub color: bool,
}

impl OutputStyle {
    /// Color only when stdout is a terminal.
    pub fn detect() -> Self {
        Self {
            color: io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }
}

// ============================================================================
// Text Output
// ============================================================================

/// Render one result line.
///
/// Success lines are `<path> --> <algorithm>-<base64 digest>`; a missing
/// path and an unhashable path each get their own distinct wording.
pub fn format_text_result(result: &HashResult, style: &OutputStyle) -> String {
    let path = result.path.display();
    match &result.outcome {
        Outcome::Hashed(integrity) => {
            if style.color {
                format!("{} --> {}", path, integrity.green())
            } else {
                format!("{} --> {}", path, integrity)
            }
        }
        Outcome::NotFound => {
            if style.color {
                format!("{} --> {}", path, "does not exist".red())
            } else {
                format!("{} --> does not exist", path)
            }
        }
        Outcome::Unreadable(reason) => {
            if style.color {
                format!("{} --> {}: {}", path, "unable to hash".yellow(), reason)
            } else {
                format!("{} --> unable to hash: {}", path, reason)
            }
        }
    }
}

/// Print one result line.
pub fn print_text_result<W: Write>(
    out: &mut W,
    result: &HashResult,
    style: &OutputStyle,
) -> io::Result<()> {
    writeln!(out, "{}", format_text_result(result, style))
}

// ============================================================================
// Output Formatting Functions
// ============================================================================

/// Escape special characters in strings for JSON output
fn escape_json_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + s.len() / 4);
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\x08' => result.push_str("\\b"),
            '\x0C' => result.push_str("\\f"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    result
}

/// Escape special characters in strings for YAML output
fn escape_yaml_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + s.len() / 4);
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c => result.push(c),
        }
    }
    result
}

/// Convert a path to String, handling non-UTF8 paths gracefully
fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Emit collected results in JSON or YAML format. Text mode prints as it
/// goes and never reaches this.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &[HashResult],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{{")?;
            writeln!(out, "  \"hash_results\": [")?;
            for (i, res) in results.iter().enumerate() {
                let path = escape_json_string(&path_to_string(&res.path));
                write!(out, "    {{\"path\": \"{}\"", path)?;
                match &res.outcome {
                    Outcome::Hashed(integrity) => {
                        write!(out, ", \"integrity\": \"{}\"", integrity)?;
                    }
                    Outcome::NotFound => {
                        write!(out, ", \"error\": \"not_found\"")?;
                    }
                    Outcome::Unreadable(reason) => {
                        write!(
                            out,
                            ", \"error\": \"unreadable\", \"reason\": \"{}\"",
                            escape_json_string(reason)
                        )?;
                    }
                }
                if i == results.len() - 1 {
                    writeln!(out, "}}")?;
                } else {
                    writeln!(out, "}},")?;
                }
            }
            writeln!(out, "  ]")?;
            writeln!(out, "}}")?;
        }
        OutputFormat::Yaml => {
            writeln!(out, "hash_results:")?;
            for res in results {
                writeln!(
                    out,
                    "  - path: \"{}\"",
                    escape_yaml_string(&path_to_string(&res.path))
                )?;
                match &res.outcome {
                    Outcome::Hashed(integrity) => {
                        writeln!(out, "    integrity: \"{}\"", integrity)?;
                    }
                    Outcome::NotFound => {
                        writeln!(out, "    error: \"not_found\"")?;
                    }
                    Outcome::Unreadable(reason) => {
                        writeln!(out, "    error: \"unreadable\"")?;
                        writeln!(out, "    reason: \"{}\"", escape_yaml_string(reason))?;
                    }
                }
            }
        }
        OutputFormat::Text => {}
    }
    Ok(())
}
