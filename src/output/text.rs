//! Plain text rendering for terminal output.
//!
//! Every statistics mode prints one result per line. The aggregate
//! modes share the `host method size` line format so their output can
//! be cut and sorted with the usual shell tools.

use crate::aggregator::totals::AggregateMap;
use crate::parser::schema::HostMethodTotal;
use std::collections::HashSet;

/// Render unique hostnames, one per line
///
/// **Public** - backs the `unique_hosts` mode
///
/// Hosts are sorted so the output is stable across runs.
pub fn render_unique_hosts(hosts: &HashSet<String>) -> String {
    let mut sorted: Vec<&String> = hosts.iter().collect();
    sorted.sort();

    sorted
        .iter()
        .map(|host| host.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render an aggregate map, one `host method size` line per pair
///
/// **Public** - backs the `agg_res_size` mode
///
/// Pairs appear in the order they first showed up in the log.
pub fn render_aggregate(totals: &AggregateMap) -> String {
    totals
        .entries()
        .iter()
        .map(|(key, size)| format_entry(&key.host, &key.method, *size))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render ranked totals, one `host method size` line per pair
///
/// **Public** - backs the `largest_res_by_host` mode
pub fn render_totals(totals: &[HostMethodTotal]) -> String {
    totals
        .iter()
        .map(|total| format_entry(&total.host, &total.method, total.total_size))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one output line
///
/// **Private** - shared by the aggregate renderers
fn format_entry(host: &str, method: &str, size: u64) -> String {
    format!("{} {} {}", host, method, size)
}
