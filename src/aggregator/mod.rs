//! Aggregation of log records into statistics.
//!
//! This module transforms decoded log lines into:
//! - Unique hostname sets
//! - Summed response sizes per host and method pair
//! - Top consumers ranked by total size
//! - Size distribution statistics

pub mod totals;
pub mod metrics;

// Re-export main types and functions
pub use totals::{aggregate_response_sizes, unique_hosts, AggregateMap, HostMethodKey};
pub use metrics::{
    calculate_size_distribution, largest_by_host_method, rank_totals, SizeDistribution,
};
