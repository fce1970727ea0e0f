//! Roster source loading.
//!
//! Fetches the spreadsheet export and parses it into raw rows. Two location
//! forms are accepted: an `http(s)` URL (the CI path — a published Google
//! Sheets CSV export) and a local file path (the development path). Anything
//! that fails here is fatal; there is no retry logic, the build either gets
//! the roster or aborts before writing output.
//!
//! Parsing is deliberately header-blind and shape-tolerant: exports carry
//! preamble rows above the real column titles and ragged short rows below,
//! so every row comes back as plain text cells and header detection happens
//! downstream (see [`crate::schema`]).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP fetch failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
}

/// Fetch the source location and parse it into rows of text cells.
pub fn fetch_rows(location: &str) -> Result<Vec<Vec<String>>, SourceError> {
    let text = if location.starts_with("http://") || location.starts_with("https://") {
        reqwest::blocking::get(location)?
            .error_for_status()?
            .text()?
    } else {
        std::fs::read_to_string(location)?
    };
    parse_rows(&text)
}

/// Parse CSV text into rows without interpreting any row as a header.
///
/// `flexible` because real exports have ragged rows; cells are untyped text.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<String>>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
