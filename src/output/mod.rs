//! Output writers for statistics reports.
//!
//! This module handles the two report formats:
//! - Plain text lines for the terminal
//! - JSON reports (stdout or file)

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use text::{render_aggregate, render_totals, render_unique_hosts};
