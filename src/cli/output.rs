//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::Value;

use crate::cli::commands::ConfigReport;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

fn format_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".dimmed().to_string(),
        Some(value) => value.to_string(),
    }
}

/// Print a script's config as a two-column table
pub fn print_config_table(report: &ConfigReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Field").fg(Color::Cyan),
            Cell::new("Value").fg(Color::Cyan),
        ]);

    let folder = match report.record.folder.as_deref() {
        Some(folder) if !folder.is_empty() => folder.to_string(),
        _ => "(derived)".dimmed().to_string(),
    };

    table.add_row(vec![Cell::new("Script"), Cell::new(report.script.display())]);
    table.add_row(vec![
        Cell::new("Config"),
        Cell::new(report.config_path.display()),
    ]);
    table.add_row(vec![Cell::new("Name"), Cell::new(&report.record.name)]);
    table.add_row(vec![Cell::new("Folder"), Cell::new(folder)]);
    table.add_row(vec![
        Cell::new("Params"),
        Cell::new(format_value(report.record.params.as_ref())),
    ]);
    table.add_row(vec![
        Cell::new("Input override"),
        Cell::new(format_value(report.record.interactive_input_override.as_ref())),
    ]);
    table.add_row(vec![
        Cell::new("Job path"),
        Cell::new(&report.buildable_name).fg(Color::Green),
    ]);

    println!("{}", table);
}
