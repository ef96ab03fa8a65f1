//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::config::Snapshot;
use crate::error::ValidationErrors;

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

/// Print one line per validation problem
pub fn print_validation_errors(errors: &ValidationErrors) {
    for err in errors {
        error(&err.to_string());
    }
}

/// Print a table of snapshots, marking the last viewed one
pub fn print_snapshot_table(snapshots: &[&Snapshot], last_viewed: &str) {
    if snapshots.is_empty() {
        info("No snapshots found");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("Id").fg(Color::Cyan),
            Cell::new("Name").fg(Color::Cyan),
            Cell::new("Plot").fg(Color::Cyan),
            Cell::new("Axes").fg(Color::Cyan),
            Cell::new("State").fg(Color::Cyan),
        ]);

    for (i, snapshot) in snapshots.iter().enumerate() {
        let (state, state_color) = if snapshot.is_deleted {
            ("deleted", Color::Red)
        } else if snapshot.is_enabled {
            ("enabled", Color::Green)
        } else {
            ("disabled", Color::Yellow)
        };

        let id = if snapshot.id == last_viewed {
            format!("{} *", snapshot.id)
        } else {
            snapshot.id.clone()
        };

        let layout = &snapshot.layout;
        let axes = if layout.x_axis_attribute.is_empty() && layout.y_axis_attribute.is_empty() {
            "-".to_string()
        } else {
            format!("{} / {}", layout.x_axis_attribute, layout.y_axis_attribute)
        };

        table.add_row(vec![
            Cell::new(i),
            Cell::new(id),
            Cell::new(&snapshot.display_name),
            Cell::new(layout.plot_type.as_str()),
            Cell::new(axes),
            Cell::new(state).fg(state_color),
        ]);
    }

    println!("{table}");
}
