// Rust guideline compliant 2026-10-19

//! Terminal UI utilities for the issue board CLI.
//!
//! This module provides color support, terminal width detection,
//! and text wrapping.

use std::env;
use std::io::Write;
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Gets the terminal width in columns.
///
/// # Returns
/// The terminal width, or 80 if it cannot be determined
pub fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Wraps text to fit within the terminal width.
///
/// # Arguments
/// * `text` - The text to wrap
/// * `indent` - The indentation level (in spaces) for continuation lines
pub fn wrap_text(text: &str, indent: usize) -> String {
    wrap_to_width(text, indent, get_terminal_width())
}

/// Wraps text to `width` columns, indenting continuation lines.
///
/// Text is returned unchanged when fewer than 10 columns remain after the
/// indent.
pub fn wrap_to_width(text: &str, indent: usize, width: usize) -> String {
    let available_width = width.saturating_sub(indent);

    if available_width < 10 {
        return text.to_string();
    }

    let mut result = String::new();
    let indent_str = " ".repeat(indent);

    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            result.push('\n');
            result.push_str(&indent_str);
        }

        if line.chars().count() <= available_width {
            result.push_str(line);
            continue;
        }

        let mut current_line = String::new();
        for word in line.split_whitespace() {
            let current_len = current_line.chars().count();
            let word_len = word.chars().count();
            if current_line.is_empty() {
                current_line.push_str(word);
            } else if current_len + 1 + word_len <= available_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                result.push_str(&current_line);
                result.push('\n');
                result.push_str(&indent_str);
                current_line = word.to_string();
            }
        }
        result.push_str(&current_line);
    }

    result
}

/// Renders `text` in `color`, or returns it unchanged when color is off.
pub fn paint(text: &str, color: Color, bold: bool, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }

    let mut buffer = Buffer::ansi();
    let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
    let _ = write!(buffer, "{}", text);
    let _ = buffer.reset();
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}
