// Rust guideline compliant 2026-10-19

//! Issue board CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;

pub use logging::{init_tracing, parse_log_level};
pub use output::{create_formatter, format_timestamp, OutputFormatter};
pub use terminal::{get_terminal_width, should_use_color, wrap_text};
