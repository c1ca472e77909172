//! Reqstat
//!
//! Quick aggregate statistics over structured request log files.
//!
//! This crate provides the core implementation for the
//! `reqstat` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install reqstat
//! reqstat --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod loader;
pub mod output;
pub mod parser;
pub mod utils;
