//! Log record decoding.
//!
//! Each line of a request log has the layout
//! `TS<n>:<METHOD>:<scheme>://<host>/<path>:<size>`,
//! which colon-splits into exactly five fields. The host lives inside
//! the URL field, as the third slash-delimited segment.

use crate::utils::config::{
    HOST_SEGMENT_INDEX, METHOD_FIELD_INDEX, RECORD_DELIMITER, RECORD_FIELD_COUNT, SIZE_FIELD_INDEX,
    URL_FIELD_INDEX,
};
use crate::utils::error::ParseError;

/// A decoded request log record
///
/// Only the parts the statistics need are kept. The timestamp and the
/// URL path are dropped at decode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Hostname extracted from the URL field
    pub host: String,

    /// Request method, e.g. `GET` or `POST`
    pub method: String,

    /// Response size in bytes
    pub response_size: u64,
}

/// Decode a single log line into a record
///
/// **Public** - used by every aggregation function
///
/// # Arguments
/// * `line` - Raw log line without its terminator
/// * `line_number` - 1-based position in the file, for error reporting
///
/// # Returns
/// The decoded record
///
/// # Errors
/// * `ParseError::FieldCount` - Line does not split into exactly 5 fields
/// * `ParseError::MissingHost` - URL field has no host segment
/// * `ParseError::InvalidResponseSize` - Size field is not an unsigned integer
pub fn parse_record(line: &str, line_number: usize) -> Result<LogRecord, ParseError> {
    let fields: Vec<&str> = line.split(RECORD_DELIMITER).collect();

    if fields.len() != RECORD_FIELD_COUNT {
        return Err(ParseError::FieldCount {
            line: line_number,
            found: fields.len(),
        });
    }

    let method = fields[METHOD_FIELD_INDEX];
    let url = fields[URL_FIELD_INDEX];
    let size_field = fields[SIZE_FIELD_INDEX];

    let host = extract_host(url).ok_or_else(|| ParseError::MissingHost {
        line: line_number,
        url: url.to_string(),
    })?;

    let response_size = size_field
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidResponseSize {
            line: line_number,
            value: size_field.to_string(),
        })?;

    Ok(LogRecord {
        host: host.to_string(),
        method: method.to_string(),
        response_size,
    })
}

/// Pull the host out of the URL field
///
/// **Private** - the URL field arrives without its scheme, e.g.
/// `//hackernews.com/item`, so the host is the segment after the two
/// leading slashes. Returns `None` when that segment does not exist.
fn extract_host(url: &str) -> Option<&str> {
    url.split('/').nth(HOST_SEGMENT_INDEX)
}
