use reqstat::aggregator::{
    aggregate_response_sizes, calculate_size_distribution, largest_by_host_method, rank_totals,
    unique_hosts, AggregateMap,
};
use reqstat::utils::error::ParseError;

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
fn test_unique_hosts_on_fixture() {
    let hosts = unique_hosts(&fixture_lines()).unwrap();

    assert_eq!(hosts.len(), 3);
    assert!(hosts.contains("hackernews.com"));
    assert!(hosts.contains("google.com"));
    assert!(hosts.contains("k8s.io"));
}

#[test]
fn test_aggregate_on_fixture() {
    let totals = aggregate_response_sizes(&fixture_lines()).unwrap();

    assert_eq!(totals.len(), 4);
    assert_eq!(totals.get("hackernews.com", "GET"), Some(3500));
    assert_eq!(totals.get("hackernews.com", "POST"), Some(20));
    assert_eq!(totals.get("google.com", "GET"), Some(10000));
    assert_eq!(totals.get("k8s.io", "GET"), Some(20));
}

#[test]
fn test_aggregate_total_matches_sum_of_sizes() {
    let totals = aggregate_response_sizes(&fixture_lines()).unwrap();

    let sum: u64 = totals.entries().iter().map(|(_, size)| *size).sum();

    assert_eq!(sum, 2000 + 1500 + 20 + 10000 + 20);
}

#[test]
fn test_aggregate_is_deterministic() {
    let first = aggregate_response_sizes(&fixture_lines()).unwrap();
    let second = aggregate_response_sizes(&fixture_lines()).unwrap();

    assert_eq!(first.entries(), second.entries());
}

#[test]
fn test_largest_top_two_on_fixture() {
    let top = largest_by_host_method(&fixture_lines(), 2).unwrap();

    assert_eq!(top.len(), 2);
    assert_eq!(
        (top[0].host.as_str(), top[0].method.as_str(), top[0].total_size),
        ("google.com", "GET", 10000)
    );
    assert_eq!(
        (top[1].host.as_str(), top[1].method.as_str(), top[1].total_size),
        ("hackernews.com", "GET", 3500)
    );
}

#[test]
fn test_largest_count_zero() {
    let top = largest_by_host_method(&fixture_lines(), 0).unwrap();
    assert!(top.is_empty());
}

#[test]
fn test_largest_count_exceeding_pairs() {
    let top = largest_by_host_method(&fixture_lines(), 10).unwrap();

    assert_eq!(top.len(), 4);
    // The two pairs tied at 20 bytes stay in log order
    assert_eq!(top[2].host, "hackernews.com");
    assert_eq!(top[2].method, "POST");
    assert_eq!(top[3].host, "k8s.io");
}

#[test]
fn test_rank_is_descending() {
    let totals = aggregate_response_sizes(&fixture_lines()).unwrap();
    let ranked = rank_totals(&totals, totals.len());

    for pair in ranked.windows(2) {
        assert!(pair[0].total_size >= pair[1].total_size);
    }
}

#[test]
fn test_empty_log_produces_empty_results() {
    let lines: Vec<String> = vec![];

    assert!(unique_hosts(&lines).unwrap().is_empty());
    assert!(aggregate_response_sizes(&lines).unwrap().is_empty());
    assert!(largest_by_host_method(&lines, 2).unwrap().is_empty());
}

#[test]
fn test_malformed_field_count_reports_line() {
    let mut lines = fixture_lines();
    lines.insert(1, "TS9:GET".to_string());

    let err = aggregate_response_sizes(&lines).unwrap_err();

    assert_eq!(err, ParseError::FieldCount { line: 2, found: 2 });
}

#[test]
fn test_malformed_missing_host_reports_line() {
    let lines = vec!["TS1:GET:https:nohost:2000".to_string()];

    let err = unique_hosts(&lines).unwrap_err();

    assert_eq!(
        err,
        ParseError::MissingHost {
            line: 1,
            url: "nohost".to_string()
        }
    );
}

#[test]
fn test_malformed_size_reports_line() {
    let mut lines = fixture_lines();
    lines.push("TS6:GET:https://k8s.io/f:12x4".to_string());

    let err = largest_by_host_method(&lines, 2).unwrap_err();

    assert_eq!(
        err,
        ParseError::InvalidResponseSize {
            line: 6,
            value: "12x4".to_string()
        }
    );
}

#[test]
fn test_first_malformed_line_wins() {
    let lines = vec![
        "TS1:GET:https://hackernews.com/a:2000".to_string(),
        "bad line one".to_string(),
        "bad line two".to_string(),
    ];

    let err = aggregate_response_sizes(&lines).unwrap_err();

    assert_eq!(err.line_number(), 2);
}

#[test]
fn test_size_distribution_over_fixture() {
    let totals = aggregate_response_sizes(&fixture_lines()).unwrap();
    let dist = calculate_size_distribution(&totals);

    assert_eq!(dist.total_size, 13540);
    assert_eq!(dist.key_count, 4);
    assert_eq!(dist.mean_size_per_key, 3385);
}

#[test]
fn test_aggregate_map_accumulates_duplicate_keys() {
    let mut totals = AggregateMap::new();
    totals.add("example.com", "GET", 1);
    totals.add("example.com", "GET", 2);
    totals.add("example.com", "GET", 3);

    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get("example.com", "GET"), Some(6));
}
