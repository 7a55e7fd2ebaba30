//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR, off when not a terminal):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, store names, services, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use std::fmt::Display;

use console::{measure_text_width, style};

const RULE_WIDTH: usize = 56;

/// Apply the NO_COLOR convention. Call once at startup.
pub fn init() {
    if std::env::var_os("NO_COLOR").is_some() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ initialized work`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ secret store not found: work`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().for_stderr(), msg);
}

/// Print a warning message (yellow).
///
/// Example: `⚠ github already exists`
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ run: ghostpass init --name work`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a bold section header.
pub fn header(title: &str) {
    println!("{}", style(title).bold());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  path:  /home/alice/.ghostpass/work.gp`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value).bold());
}

/// Print a list item with bullet.
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a horizontal rule separator.
pub fn rule() {
    println!("{}", style("─".repeat(RULE_WIDTH)).dim());
}

/// Print a dimmed/secondary message.
///
/// Example: `no fields in store`
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Format a path in cyan for inline use.
pub fn path(p: impl Display) -> String {
    style(p).cyan().to_string()
}

/// Format a command in green for inline use.
pub fn cmd(c: &str) -> String {
    style(c).green().to_string()
}

/// Format a store or service name in cyan for inline use.
pub fn key(k: &str) -> String {
    style(k).cyan().to_string()
}

/// Print a bordered table.
///
/// ```text
/// +---------+----------+----------+
/// | SERVICE | USERNAME | PASSWORD |
/// +---------+----------+----------+
/// | github  | alice    | pw1      |
/// +---------+----------+----------+
/// ```
pub fn table(headers: &[&str], rows: &[Vec<&str>]) {
    print!("{}", render_table(headers, rows));
}

fn render_table(headers: &[&str], rows: &[Vec<&str>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let render_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (cell, width) in cells.iter().zip(&widths) {
            let pad = width - measure_text_width(cell);
            line.push_str(&format!(" {}{} |", cell, " ".repeat(pad)));
        }
        line.push('\n');
        line
    };

    let mut out = border.clone();
    let heading: Vec<String> = headers.iter().map(|h| h.to_uppercase()).collect();
    out.push_str(&render_row(&heading));
    out.push_str(&border);
    for row in rows {
        let cells: Vec<String> = (0..widths.len())
            .map(|i| row.get(i).copied().unwrap_or_default().to_string())
            .collect();
        out.push_str(&render_row(&cells));
    }
    if !rows.is_empty() {
        out.push_str(&border);
    }
    out
}
