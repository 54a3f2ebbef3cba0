/// Console formatting helpers - pure text, no I/O
///
/// This module handles:
/// - Display-width aware truncation and padding (emoji badges are 2 cells wide)
/// - Fixed-width table rows
/// - Section headings, percentages and progress bars
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cells in a performance progress bar
pub const PROGRESS_BAR_WIDTH: usize = 25;

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate and pad string to exact width
///
/// Overlong text is cut on a character boundary and ends in "...".
pub fn truncate_with_padding(s: &str, width: usize) -> String {
    let display_w = display_width(s);

    if display_w > width {
        let mut result = String::new();
        let mut current_width = 0;

        // Reserve space for "..."
        let target_width = if width >= 3 { width - 3 } else { width };

        for c in s.chars() {
            let c_width = UnicodeWidthChar::width(c).unwrap_or(0);
            if current_width + c_width > target_width {
                break;
            }
            result.push(c);
            current_width += c_width;
        }

        if width >= 3 {
            result.push_str("...");
            current_width += 3;
        }

        if current_width < width {
            result.push_str(&" ".repeat(width - current_width));
        }

        result
    } else {
        format!("{}{}", s, " ".repeat(width - display_w))
    }
}

/// Lay out cells into fixed-width columns separated by one space
///
/// Trailing padding of the last column is dropped.
pub fn format_row(cells: &[&str], widths: &[usize]) -> String {
    let row: Vec<String> =
        cells.iter().zip(widths.iter()).map(|(cell, width)| truncate_with_padding(cell, *width)).collect();
    row.join(" ").trim_end().to_string()
}

/// Dashed rule spanning the given column widths
pub fn format_rule(widths: &[usize]) -> String {
    let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
    "-".repeat(total)
}

/// `=== Title ===` heading preceded by a blank line
pub fn section_title(title: &str) -> String {
    format!("\n=== {} ===\n", title)
}

/// One decimal place with a percent sign
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// `[█████░░░░]` bar for a percentage, clamped into 0..=100
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let value = if percentage.is_nan() { 0.0 } else { percentage.clamp(0.0, 100.0) };
    let filled = ((value / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
