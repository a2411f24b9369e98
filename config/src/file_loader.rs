//! # Configuration File Loading
//!
//! Parses the server's line-oriented configuration format: one `key = value`
//! pair per line, `#` comments and blank lines skipped, matching quotes
//! around a value stripped.

use std::path::Path;

/// Configuration file loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed line {line} in {path}: missing '=' separator")]
    MissingSeparator { path: String, line: usize },

    #[error("Malformed line {line} in {path}: empty parameter name")]
    EmptyKey { path: String, line: usize },
}

/// Read a configuration file into ordered `(key, value)` override pairs.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Parses the complete file before any override is applied, so a malformed
/// line rejects the whole file and the caller's table is left untouched.
///
/// ## Format
/// - Lines are trimmed of surrounding whitespace.
/// - Empty lines and lines starting with `#` are skipped.
/// - Every other line must contain `=`; the text before the first `=` is the
///   parameter name, the text after it the value, both trimmed.
/// - One pair of matching `"` or `'` quotes around the value is stripped.
/// - Later lines override earlier ones for the same parameter.
///
/// ## Error Handling
/// Returns `ConfigLoadError` for:
/// - File missing or unreadable
/// - A non-comment line without `=`
/// - A parameter name empty after trimming
pub fn read_config_file(path: &Path) -> Result<Vec<(String, String)>, ConfigLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut pairs = Vec::new();
    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(ConfigLoadError::MissingSeparator {
                path: path.display().to_string(),
                line: index + 1,
            });
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigLoadError::EmptyKey {
                path: path.display().to_string(),
                line: index + 1,
            });
        }

        pairs.push((key.to_string(), strip_quotes(value.trim()).to_string()));
    }

    Ok(pairs)
}

/// Strip one pair of matching surrounding quotes, if present.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
