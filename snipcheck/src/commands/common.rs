//! Common types and utilities for snipcheck commands.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use snipcheck_util::Diagnostic;

use crate::error::{Result, SnipError};

/// Path argument that means "read standard input".
pub const STDIN_MARKER: &str = "-";

// ============================================================================
// Output Format
// ============================================================================

/// How `scan` prints the token list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KIND lexeme literal` line per token.
    #[default]
    Text,
    /// Pretty-printed Rust debug listing.
    Debug,
    /// Pretty-printed JSON array.
    Json,
}

// ============================================================================
// Input
// ============================================================================

/// Reads a source file, or standard input for `None` and `-`.
///
/// Rejects inputs over `max_bytes` and inputs that are not UTF-8.
pub fn read_source(input: Option<&Path>, max_bytes: u64) -> Result<String> {
    match input {
        Some(path) if path != Path::new(STDIN_MARKER) => read_file(path, max_bytes),
        _ => read_limited(io::stdin().lock(), max_bytes),
    }
}

fn read_file(path: &Path, max_bytes: u64) -> Result<String> {
    if !path.exists() {
        return Err(SnipError::Validation(format!(
            "Input path does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(SnipError::Validation(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }

    check_size(fs::metadata(path)?.len(), max_bytes)?;
    tracing::debug!(path = %path.display(), "reading source file");
    read_limited(fs::File::open(path)?, max_bytes)
}

/// Reads at most `max_bytes` (plus one, to detect overflow) from `reader`.
pub fn read_limited<R: Read>(reader: R, max_bytes: u64) -> Result<String> {
    let mut buf = Vec::new();
    reader.take(max_bytes.saturating_add(1)).read_to_end(&mut buf)?;
    check_size(buf.len() as u64, max_bytes)?;
    into_utf8(buf)
}

/// Rejects a source of `len` bytes if it exceeds `max_bytes`.
pub fn check_size(len: u64, max_bytes: u64) -> Result<()> {
    if len > max_bytes {
        return Err(SnipError::Validation(format!(
            "input is larger than {} bytes",
            max_bytes
        )));
    }
    Ok(())
}

fn into_utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| SnipError::Validation(format!("input is not valid UTF-8: {}", e)))
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Prints every diagnostic to stderr, rendered against `source`.
pub fn report_diagnostics(source: &str, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic.render(source));
    }
}
