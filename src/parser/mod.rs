//! Log record decoding and schema definitions.
//!
//! This module handles:
//! - Decoding raw log lines into records
//! - Extracting the host from the URL field
//! - Defining the output report schema

pub mod record;
pub mod schema;

// Re-export main types
pub use record::{parse_record, LogRecord};
pub use schema::{HostMethodTotal, StatsReport};
