//! Aggregate response sizes per host and method.
//!
//! The aggregate map remembers the order in which keys first appear,
//! so reports list host and method pairs in log order and ranking can
//! break ties by first appearance.

use crate::parser::record::parse_record;
use crate::parser::schema::HostMethodTotal;
use crate::utils::error::ParseError;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Key identifying one host and method pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostMethodKey {
    pub host: String,
    pub method: String,
}

impl HostMethodKey {
    pub fn new(host: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            method: method.into(),
        }
    }
}

/// Insertion-ordered map from host and method pair to summed size
///
/// **Public** - returned by aggregate_response_sizes
///
/// A plain `HashMap` would lose the order keys first appeared in, so
/// entries live in a `Vec` and the map only tracks their positions.
#[derive(Debug, Clone, Default)]
pub struct AggregateMap {
    /// Position of each key inside `entries`
    index: HashMap<HostMethodKey, usize>,

    /// Accumulated totals in first-appearance order
    entries: Vec<(HostMethodKey, u64)>,
}

impl AggregateMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response size to the total for a host and method pair
    ///
    /// New keys are appended, existing keys accumulate in place.
    pub fn add(&mut self, host: &str, method: &str, size: u64) {
        let key = HostMethodKey::new(host, method);
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 += size,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, size));
            }
        }
    }

    /// Look up the accumulated total for a host and method pair
    pub fn get(&self, host: &str, method: &str) -> Option<u64> {
        let key = HostMethodKey::new(host, method);
        self.index.get(&key).map(|&pos| self.entries[pos].1)
    }

    /// Number of distinct host and method pairs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no records have been added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in first-appearance order
    pub fn entries(&self) -> &[(HostMethodKey, u64)] {
        &self.entries
    }

    /// Convert to report totals, keeping first-appearance order
    pub fn to_totals(&self) -> Vec<HostMethodTotal> {
        self.entries
            .iter()
            .map(|(key, size)| HostMethodTotal {
                host: key.host.clone(),
                method: key.method.clone(),
                total_size: *size,
            })
            .collect()
    }
}

/// Collect the set of unique hostnames in a log
///
/// **Public** - backs the `unique_hosts` mode
///
/// Every line is fully decoded, so a malformed record anywhere in the
/// file fails the whole operation even though only the host is needed.
///
/// # Arguments
/// * `lines` - Raw log lines
///
/// # Returns
/// The distinct hostnames, unordered
///
/// # Errors
/// * `ParseError` - First malformed line, with its line number
pub fn unique_hosts(lines: &[String]) -> Result<HashSet<String>, ParseError> {
    debug!("Collecting unique hosts from {} lines", lines.len());

    let mut hosts = HashSet::new();
    for (idx, line) in lines.iter().enumerate() {
        let record = parse_record(line, idx + 1)?;
        hosts.insert(record.host);
    }

    debug!("Found {} unique hosts", hosts.len());

    Ok(hosts)
}

/// Sum response sizes per host and method pair
///
/// **Public** - backs the `agg_res_size` and `largest_res_by_host` modes
///
/// # Arguments
/// * `lines` - Raw log lines
///
/// # Returns
/// Totals keyed by host and method, in first-appearance order
///
/// # Errors
/// * `ParseError` - First malformed line, with its line number
pub fn aggregate_response_sizes(lines: &[String]) -> Result<AggregateMap, ParseError> {
    debug!("Aggregating response sizes from {} lines", lines.len());

    let mut totals = AggregateMap::new();
    for (idx, line) in lines.iter().enumerate() {
        let record = parse_record(line, idx + 1)?;
        totals.add(&record.host, &record.method, record.response_size);
    }

    debug!("Aggregated {} host/method pairs", totals.len());

    Ok(totals)
}
