//! Log file loading.
//!
//! Reads a request log from disk and splits it into lines for the
//! aggregation functions. Decoding of individual records happens later,
//! in the parser module.

use crate::utils::error::LoadError;
use log::debug;
use std::fs;
use std::path::Path;

/// Load a log file and split it into lines
///
/// **Public** - entry point for all statistics commands
///
/// Line terminators are stripped and a trailing newline does not
/// produce an empty final line. Empty lines in the middle of the file
/// are preserved and will fail record decoding later.
///
/// # Arguments
/// * `path` - Path to the log file
///
/// # Returns
/// The file content as one `String` per line
///
/// # Errors
/// * `LoadError::ReadFile` - File missing, unreadable, or not valid UTF-8
pub fn load_lines(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();

    debug!("Loading log file: {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<String> = content.lines().map(str::to_string).collect();

    debug!("Loaded {} lines from {}", lines.len(), path.display());

    Ok(lines)
}
