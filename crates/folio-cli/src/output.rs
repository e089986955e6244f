//! Rendering of command results.
//!
//! Every command result is `Serialize`: `--format json` prints it as-is,
//! `--format table` hands it to a per-command renderer built from the
//! helpers below.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Prints `value` as JSON, or through `human` for table output.
pub fn render<T: Serialize>(value: &T, format: OutputFormat, human: impl FnOnce(&T)) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => print_error(&format!("Could not encode output: {e}")),
        },
        OutputFormat::Table => human(value),
    }
}

/// Prints a headline followed by aligned `label: value` lines.
pub fn print_fields(headline: &str, fields: &[(&str, String)]) {
    println!("✓ {headline}");
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
    for (label, value) in fields {
        println!("  {:<width$} {value}", format!("{label}:"));
    }
}

/// Prints rows as a rounded table, or a note when there are none.
pub fn print_rows<T: Tabled>(rows: &[T], empty: &str) {
    if rows.is_empty() {
        println!("{empty}");
    } else {
        println!("{}", Table::new(rows).with(Style::rounded()));
    }
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    eprintln!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}
