//! Report formatting and printing utilities.
//!
//! Records go to stdout, diagnostics go to stderr. Every printer has a `_to`
//! variant taking a writer so output can be tested without a terminal.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::args::OutputFormat;
use crate::core::{ExtractionRecord, ExtractionSummary};
use crate::utils::plural;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// One entry of the JSON output.
#[derive(Debug, Serialize)]
struct FileKeys<'a> {
    file: &'a str,
    keys: &'a [ExtractionRecord],
}

/// Print extracted records in the requested format, then diagnostics.
pub fn print(summary: &ExtractionSummary, format: OutputFormat, verbose: bool) -> Result<()> {
    match format {
        OutputFormat::Text => print_text_to(summary, &mut io::stdout().lock()),
        OutputFormat::Json => print_json_to(summary, &mut io::stdout().lock())?,
    }
    print_diagnostics_to(summary, verbose, &mut io::stderr().lock());
    Ok(())
}

/// Print records grouped by file, followed by a summary line.
pub fn print_text_to<W: Write>(summary: &ExtractionSummary, writer: &mut W) {
    let mut files_with_keys = 0;

    for file in summary.files.iter().filter(|f| !f.records.is_empty()) {
        files_with_keys += 1;
        let _ = writeln!(writer, "{}", file.file_path.bold());
        for record in &file.records {
            match &record.default_value {
                Some(default_value) => {
                    let _ = writeln!(
                        writer,
                        "  {} {}",
                        record.key,
                        format!("(default: {:?})", default_value).dimmed()
                    );
                }
                None => {
                    let _ = writeln!(writer, "  {}", record.key);
                }
            }
        }
        let _ = writeln!(writer);
    }

    let total_keys = summary.total_keys();
    let msg = if total_keys == 0 {
        format!(
            "Scanned {} - no keys found",
            plural(summary.files_checked(), "file", "files")
        )
    } else {
        format!(
            "Extracted {} from {}",
            plural(total_keys, "key", "keys"),
            plural(files_with_keys, "file", "files")
        )
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a pretty JSON array of `{ "file", "keys" }` for files with at least one key.
pub fn print_json_to<W: Write>(summary: &ExtractionSummary, writer: &mut W) -> Result<()> {
    let entries: Vec<FileKeys<'_>> = summary
        .files
        .iter()
        .filter(|f| !f.records.is_empty())
        .map(|f| FileKeys {
            file: &f.file_path,
            keys: &f.records,
        })
        .collect();

    let json = serde_json::to_string_pretty(&entries).context("Failed to serialize keys.")?;
    writeln!(writer, "{}", json).context("Failed to write output.")?;
    Ok(())
}

/// Print malformed-options and unreadable-file warnings.
///
/// Verbose mode lists each one; otherwise a single summary line per kind.
pub fn print_diagnostics_to<W: Write>(summary: &ExtractionSummary, verbose: bool, writer: &mut W) {
    let warning = "warning:".bold().yellow();

    if verbose {
        for file in &summary.files {
            for w in &file.warnings {
                let _ = writeln!(writer, "{} {}:{}: {}", warning, file.file_path, w.line, w.message);
            }
        }
        for error in &summary.read_errors {
            let _ = writeln!(writer, "{} {}: {}", warning, error.file_path, error.error);
        }
        return;
    }

    let warning_count = summary.warning_count();
    if warning_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} tag(s) had malformed options (use {} for details)",
            warning,
            warning_count,
            "-v".cyan()
        );
    }
    if !summary.read_errors.is_empty() {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            warning,
            summary.read_errors.len(),
            "-v".cyan()
        );
    }
}
