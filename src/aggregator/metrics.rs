//! Rank host and method pairs by total response size.
//!
//! The largest consumers of response bytes are the first places to
//! look when a log shows unexpected traffic volume.

use super::totals::{aggregate_response_sizes, AggregateMap};
use crate::parser::schema::HostMethodTotal;
use crate::utils::error::ParseError;
use log::debug;

/// Find the host and method pairs with the largest summed response sizes
///
/// **Public** - backs the `largest_res_by_host` mode
///
/// # Arguments
/// * `lines` - Raw log lines
/// * `count` - Number of top pairs to return
///
/// # Returns
/// Up to `count` totals, sorted by summed size (descending). Pairs with
/// equal totals keep their first-appearance order. A `count` of zero
/// returns an empty vector, a `count` beyond the number of pairs
/// returns them all.
///
/// # Errors
/// * `ParseError` - First malformed line, with its line number
pub fn largest_by_host_method(
    lines: &[String],
    count: usize,
) -> Result<Vec<HostMethodTotal>, ParseError> {
    debug!("Ranking top {} pairs from {} lines", count, lines.len());

    let totals = aggregate_response_sizes(lines)?;
    Ok(rank_totals(&totals, count))
}

/// Rank an aggregate map and keep the top entries
///
/// **Public** - reused when the caller already has the totals
pub fn rank_totals(totals: &AggregateMap, count: usize) -> Vec<HostMethodTotal> {
    let mut ranked = totals.to_totals();

    // Stable sort on the first-appearance order, so ties stay in log order
    ranked.sort_by(|a, b| b.total_size.cmp(&a.total_size));
    ranked.truncate(count);

    ranked
}

/// Response size distribution statistics
///
/// **Public** - returned from calculate_size_distribution
#[derive(Debug, Clone, Default)]
pub struct SizeDistribution {
    /// Total bytes across all pairs
    pub total_size: u64,

    /// Number of distinct host and method pairs
    pub key_count: usize,

    /// Mean bytes per pair
    pub mean_size_per_key: u64,

    /// Median bytes per pair
    pub median_size_per_key: u64,
}

impl SizeDistribution {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Total: {} bytes | Pairs: {} | Mean: {} | Median: {}",
            self.total_size, self.key_count, self.mean_size_per_key, self.median_size_per_key
        )
    }
}

/// Calculate size distribution statistics over an aggregate map
///
/// **Public** - provides summary statistics
///
/// # Arguments
/// * `totals` - Aggregated response sizes
///
/// # Returns
/// Statistics about how response bytes spread across pairs
pub fn calculate_size_distribution(totals: &AggregateMap) -> SizeDistribution {
    if totals.is_empty() {
        return SizeDistribution::default();
    }

    let total: u64 = totals.entries().iter().map(|(_, size)| *size).sum();
    let count = totals.len();
    let mean = total / count as u64;

    // Get median
    let mut sizes: Vec<u64> = totals.entries().iter().map(|(_, size)| *size).collect();
    sizes.sort_unstable();
    let median = sizes[sizes.len() / 2];

    SizeDistribution {
        total_size: total,
        key_count: count,
        mean_size_per_key: mean,
        median_size_per_key: median,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_lines() -> Vec<String> {
        vec![
            "TS1:GET:https://hackernews.com/a:2000".to_string(),
            "TS2:GET:https://hackernews.com/b:1500".to_string(),
            "TS3:POST:https://hackernews.com/c:20".to_string(),
            "TS4:GET:https://google.com/d:10000".to_string(),
            "TS5:GET:https://k8s.io/e:20".to_string(),
        ]
    }

    #[test]
    fn test_largest_by_host_method_top_two() {
        let top = largest_by_host_method(&fixture_lines(), 2).unwrap();

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].host, "google.com");
        assert_eq!(top[0].method, "GET");
        assert_eq!(top[0].total_size, 10000);
        assert_eq!(top[1].host, "hackernews.com");
        assert_eq!(top[1].method, "GET");
        assert_eq!(top[1].total_size, 3500);
    }

    #[test]
    fn test_largest_count_zero_returns_nothing() {
        let top = largest_by_host_method(&fixture_lines(), 0).unwrap();
        assert!(top.is_empty());
    }

    #[test]
    fn test_largest_count_beyond_pairs_returns_all() {
        let top = largest_by_host_method(&fixture_lines(), 100).unwrap();

        assert_eq!(top.len(), 4);
        assert_eq!(top[3].total_size, 20);
    }

    #[test]
    fn test_largest_propagates_parse_error() {
        let lines = vec!["broken".to_string()];

        let err = largest_by_host_method(&lines, 2).unwrap_err();

        assert_eq!(err.line_number(), 1);
    }

    #[test]
    fn test_rank_ties_keep_first_appearance_order() {
        let mut totals = AggregateMap::new();
        totals.add("hackernews.com", "POST", 20);
        totals.add("k8s.io", "GET", 20);
        totals.add("google.com", "GET", 10000);

        let ranked = rank_totals(&totals, 3);

        assert_eq!(ranked[0].host, "google.com");
        assert_eq!(ranked[1].host, "hackernews.com");
        assert_eq!(ranked[2].host, "k8s.io");
    }

    #[test]
    fn test_calculate_size_distribution() {
        let mut totals = AggregateMap::new();
        totals.add("a.example", "GET", 8000);
        totals.add("b.example", "GET", 1000);
        totals.add("c.example", "GET", 500);
        totals.add("d.example", "GET", 500);

        let dist = calculate_size_distribution(&totals);

        assert_eq!(dist.total_size, 10000);
        assert_eq!(dist.key_count, 4);
        assert_eq!(dist.mean_size_per_key, 2500);
        assert_eq!(dist.median_size_per_key, 1000);
    }

    #[test]
    fn test_size_distribution_empty() {
        let totals = AggregateMap::new();
        let dist = calculate_size_distribution(&totals);

        assert_eq!(dist.total_size, 0);
        assert_eq!(dist.key_count, 0);
    }
}
