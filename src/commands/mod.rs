//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod stats;

// Re-export main command functions
pub use stats::{execute_stats, validate_args, Mode, StatsArgs};
