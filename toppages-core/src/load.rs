//! Reading probability logs and URL lists.
//!
//! Both formats are plain text with whitespace-separated tokens; newlines
//! and spaces are interchangeable.

use crate::error::{ReportError, Result};
use crate::model::Variant;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Read a file into memory, mapping any failure to [`ReportError::FileAccess`].
///
/// Contents are kept as raw bytes; decoding happens per token.
fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| ReportError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Token separators: ASCII space, tab, newline, carriage return, vertical tab and form feed.
fn is_separator(byte: &u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

/// Split on ASCII whitespace only. Non-ASCII spaces (U+00A0 and friends)
/// stay inside their token so URL indices never shift.
fn tokens(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    content.split(is_separator).filter(|token| !token.is_empty())
}

/// Load and parse a probability log
pub fn load_probabilities(path: &Path) -> Result<Vec<f64>> {
    let content = read_input(path)?;
    let probabilities = parse_probabilities(&content, path)?;
    debug!(
        "Loaded {} probabilities from {}",
        probabilities.len(),
        path.display()
    );
    Ok(probabilities)
}

/// Parse whitespace-separated floats. `path` is only used in error messages.
///
/// NaN is rejected since it has no place in a descending order. So is any
/// token that is not valid UTF-8.
pub fn parse_probabilities(content: impl AsRef<[u8]>, path: &Path) -> Result<Vec<f64>> {
    tokens(content.as_ref())
        .enumerate()
        .map(|(idx, token)| {
            let value = std::str::from_utf8(token)
                .ok()
                .and_then(|text| text.parse::<f64>().ok());
            match value {
                Some(value) if !value.is_nan() => Ok(value),
                _ => Err(ReportError::Parse {
                    path: path.to_path_buf(),
                    position: idx + 1,
                    token: String::from_utf8_lossy(token).into_owned(),
                }),
            }
        })
        .collect()
}

/// Load a URL list
pub fn load_urls(path: &Path) -> Result<Vec<String>> {
    let content = read_input(path)?;
    let urls = parse_urls(&content);
    debug!("Loaded {} URLs from {}", urls.len(), path.display());
    Ok(urls)
}

/// Split a URL list into tokens. Invalid UTF-8 is replaced with U+FFFD
/// rather than rejected.
pub fn parse_urls(content: impl AsRef<[u8]>) -> Vec<String> {
    tokens(content.as_ref())
        .map(|token| String::from_utf8_lossy(token).into_owned())
        .collect()
}

/// Make sure every page of `variant` has a URL.
///
/// Extra URLs are tolerated and only logged.
pub fn check_lengths(variant: &Variant, url_count: usize) -> Result<()> {
    if variant.len() > url_count {
        return Err(ReportError::IndexOutOfRange {
            variant: variant.name.clone(),
            index: url_count,
            url_count,
        });
    }
    if variant.len() < url_count {
        warn!(
            "{} has {} probabilities but {} URLs were loaded",
            variant.name,
            variant.len(),
            url_count
        );
    }
    Ok(())
}
