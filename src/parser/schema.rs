//! Output JSON schema definitions for statistics reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Log file the statistics were computed from
    pub log_file: String,

    /// Mode that produced this report
    pub mode: String,

    /// Unique hostnames, present for the `unique_hosts` mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<String>>,

    /// Per host and method totals, present for the aggregate modes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<Vec<HostMethodTotal>>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Summed response size for one host and method pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostMethodTotal {
    /// Hostname the requests went to
    pub host: String,

    /// Request method, e.g. `GET` or `POST`
    pub method: String,

    /// Sum of response sizes in bytes
    pub total_size: u64,
}

impl StatsReport {
    /// Create an empty report for the given file and mode
    pub fn new(log_file: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            log_file: log_file.into(),
            mode: mode.into(),
            hosts: None,
            totals: None,
            generated_at: Utc::now().to_rfc3339(),
        }
    }

    /// Attach a hostname list to the report
    pub fn with_hosts(mut self, hosts: Vec<String>) -> Self {
        self.hosts = Some(hosts);
        self
    }

    /// Attach host and method totals to the report
    pub fn with_totals(mut self, totals: Vec<HostMethodTotal>) -> Self {
        self.totals = Some(totals);
        self
    }
}
