// src/loader.rs
//! CSV comment loader with encoding fallback.
//!
//! - Decodes UTF-8 first (a leading BOM is stripped); invalid UTF-8 falls back to Latin-1.
//! - Reads a header row and picks the text column by name.
//! - Drops records whose text is missing, empty, or a pandas-style NA marker.

use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use std::{fs, path::Path};
use tracing::{info, warn};

/// Cell values treated as missing, in addition to the empty string.
const NA_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedComments {
    pub comments: Vec<String>,
    /// Records skipped because the text cell was missing.
    pub dropped: usize,
    pub encoding: TextEncoding,
}

/// Read `path` and return the `column` values of every usable record, in file order.
pub fn load_comments(path: &Path, delimiter: u8, column: &str) -> Result<LoadedComments> {
    let bytes = fs::read(path).with_context(|| format!("reading comments from {}", path.display()))?;
    let (text, encoding) = decode_with_fallback(bytes);
    if encoding == TextEncoding::Latin1 {
        warn!(path = %path.display(), "input is not valid UTF-8, decoded as Latin-1");
    }

    let (comments, dropped) = parse_comments(&text, delimiter, column)
        .with_context(|| format!("parsing {}", path.display()))?;
    info!(
        path = %path.display(),
        kept = comments.len(),
        dropped,
        ?encoding,
        "comments loaded"
    );

    Ok(LoadedComments {
        comments,
        dropped,
        encoding,
    })
}

/// UTF-8 if possible, otherwise one char per byte (ISO-8859-1).
pub fn decode_with_fallback(bytes: Vec<u8>) -> (String, TextEncoding) {
    match String::from_utf8(bytes) {
        Ok(mut s) => {
            if s.starts_with('\u{FEFF}') {
                s.remove(0);
            }
            (s, TextEncoding::Utf8)
        }
        Err(e) => {
            let s = e.into_bytes().iter().map(|&b| b as char).collect();
            (s, TextEncoding::Latin1)
        }
    }
}

/// Returns `(kept_values, dropped_count)`.
pub fn parse_comments(text: &str, delimiter: u8, column: &str) -> Result<(Vec<String>, usize)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().context("reading CSV header")?.clone();
    let idx = headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| {
            anyhow!(
                "column {column:?} not found (available: {})",
                headers.iter().collect::<Vec<_>>().join(", ")
            )
        })?;

    let mut kept = Vec::new();
    let mut dropped = 0usize;
    for (i, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("reading CSV record {}", i + 1))?;
        match record.get(idx) {
            Some(v) if !is_missing(v) => kept.push(v.to_string()),
            _ => dropped += 1,
        }
    }
    Ok((kept, dropped))
}

fn is_missing(value: &str) -> bool {
    value.is_empty() || NA_MARKERS.contains(&value)
}
