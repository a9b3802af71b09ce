//! Streaming listing CSV parser.
//!
//! Listings are exported spreadsheets with one row per title on offer. Only
//! two columns matter, `Title` and `Year of release`, and they are found by
//! header name since their position varies between exports.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use shelfcheck_match::{ListingRow, MovieIndex};

use crate::error::SourceError;

const TITLE_HEADER: &str = "Title";
const YEAR_HEADER: &str = "Year of release";

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize, SourceError> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| SourceError::invalid_listing(format!("missing '{}' column", name)))
}

fn field(record: &csv::StringRecord, col: usize) -> Option<String> {
    record
        .get(col)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Parse listing rows from CSV text.
pub fn parse_listing<R: Read>(reader: R) -> Result<Vec<ListingRow>, SourceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let title_col = find_column(&headers, TITLE_HEADER)?;
    let year_col = find_column(&headers, YEAR_HEADER)?;

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping listing row {}: {}", i + 2, e);
                continue;
            }
        };
        rows.push(ListingRow {
            title: field(&record, title_col),
            year: field(&record, year_col),
        });
    }

    Ok(rows)
}

/// Load a listing CSV from disk and index it.
pub fn load_movie_index(path: &Path) -> Result<MovieIndex, SourceError> {
    let file = File::open(path)?;
    let rows = parse_listing(file)?;
    let index = MovieIndex::from_rows(rows);
    log::debug!("Indexed {} listing rows from {}", index.len(), path.display());
    Ok(index)
}
