//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default number of entries returned by the `largest_res_by_host` mode
pub const DEFAULT_TOP_COUNT: usize = 2;

// Constants for the log record layout
// A record is TS<int>:<METHOD>:<scheme>://<host>/<path...>:<size>,
// i.e. exactly five colon-separated fields, with the host sitting in
// the third slash-delimited segment of the URL field.
pub const RECORD_DELIMITER: char = ':';
pub const RECORD_FIELD_COUNT: usize = 5;

// Field positions within a split record
pub const METHOD_FIELD_INDEX: usize = 1;
pub const URL_FIELD_INDEX: usize = 3;
pub const SIZE_FIELD_INDEX: usize = 4;

/// Index of the host inside the slash-split URL field
/// (`//host/path` splits to `["", "", "host", "path", ...]`)
pub const HOST_SEGMENT_INDEX: usize = 2;
