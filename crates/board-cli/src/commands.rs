// Rust guideline compliant 2026-10-19

//! Command implementations for the issue board CLI.
//!
//! Each command takes the workspace root and a formatter and returns the
//! text to print, so the binary and the tests share one code path.

pub mod account;
pub mod create;
pub mod init;
pub mod list;
pub mod show;
pub mod similar;
pub mod status;
