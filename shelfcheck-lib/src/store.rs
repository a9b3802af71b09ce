//! Want-list persistence.
//!
//! A store loads the list once at the start of a pass and receives the
//! (possibly upgraded) list once at the end.
//!
//! - [`TdfStore`]: tab-delimited book list, rewritten in place.
//! - [`WatchlistStore`]: IMDb watchlist CSV export, read-only.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use shelfcheck_core::{Book, MediaItem, Movie};

use crate::error::StoreError;

/// Load and save a want list of `I`.
pub trait CatalogStore<I> {
    fn load(&mut self) -> Result<Vec<I>, StoreError>;

    fn save(&mut self, items: &[I]) -> Result<(), StoreError>;
}

// ── Tab-delimited book list ─────────────────────────────────────────────────

const COMMENT: &str = "#";

/// Date format of the status header line, e.g. `Sun, October 18 2026`.
const HEADER_DATE_FORMAT: &str = "%a, %B %-d %Y";

/// Book list stored as `author<TAB>title[<TAB>recommender]<TAB>status` lines.
pub struct TdfStore {
    path: PathBuf,
    as_of: Option<NaiveDate>,
}

impl TdfStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            as_of: None,
        }
    }

    /// Stamp the header with `date` instead of today.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse one non-comment line into a book.
pub fn parse_tdf_line(line: &str) -> Result<Book, StoreError> {
    let mut fields: Vec<&str> = line.split('\t').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }

    match fields.as_slice() {
        [author, title, status] => Ok(Book::new(*author, *title, None, *status)),
        [author, title, recommender, status] => Ok(Book::new(
            *author,
            *title,
            Some(recommender.to_string()),
            *status,
        )),
        _ => Err(StoreError::malformed(format!(
            "{} fields in '{}', expected 3 or 4",
            fields.len(),
            line
        ))),
    }
}

/// Read books from tab-delimited text. Comments and blank lines are
/// ignored; malformed lines are logged and skipped.
pub fn read_tdf<R: BufRead>(reader: R) -> Result<Vec<Book>, StoreError> {
    let mut books = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with(COMMENT) || line.trim().is_empty() {
            continue;
        }
        match parse_tdf_line(&line) {
            Ok(book) => books.push(book),
            Err(e) => log::warn!("Skipping line {}: {}", i + 1, e),
        }
    }
    Ok(books)
}

/// Write books as tab-delimited text under a dated status header.
pub fn write_tdf<W: Write>(mut out: W, books: &[Book], as_of: NaiveDate) -> io::Result<()> {
    writeln!(out, "{} status as of {}", COMMENT, as_of.format(HEADER_DATE_FORMAT))?;
    for book in books {
        write!(out, "{}\t{}", book.author(), book.title())?;
        if let Some(recommender) = book.recommender() {
            write!(out, "\t{}", recommender)?;
        }
        writeln!(out, "\t{}", book.file_tag())?;
    }
    out.flush()
}

impl CatalogStore<Book> for TdfStore {
    fn load(&mut self) -> Result<Vec<Book>, StoreError> {
        let file = File::open(&self.path)?;
        read_tdf(BufReader::new(file))
    }

    /// Write to a sibling temp file, then rename it over the original.
    fn save(&mut self, items: &[Book]) -> Result<(), StoreError> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let as_of = self.as_of.unwrap_or_else(|| Local::now().date_naive());
        let file = File::create(&tmp)?;
        write_tdf(BufWriter::new(file), items, as_of)?;
        fs::rename(&tmp, &self.path)?;

        log::debug!("Wrote {} books to {}", items.len(), self.path.display());
        Ok(())
    }
}

// ── IMDb watchlist ──────────────────────────────────────────────────────────

/// Zero-based column positions in an IMDb watchlist export.
const TITLE_COLUMN: usize = 5;
const YEAR_COLUMN: usize = 10;

/// Movie watchlist exported from IMDb as CSV.
///
/// The export is never rewritten; saving logs the movies that are
/// currently streaming.
pub struct WatchlistStore {
    path: PathBuf,
}

impl WatchlistStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read movies from watchlist CSV. The header row, rows that are too short
/// and rows without a positive year are skipped.
pub fn read_watchlist<R: io::Read>(reader: R) -> Result<Vec<Movie>, StoreError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut movies = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping watchlist row {}: {}", i + 1, e);
                continue;
            }
        };
        if record.len() <= YEAR_COLUMN {
            log::warn!(
                "Skipping watchlist row {}: only {} fields, need at least {}",
                i + 1,
                record.len(),
                YEAR_COLUMN + 1
            );
            continue;
        }

        let title = record[TITLE_COLUMN].trim();
        match record[YEAR_COLUMN].trim().parse::<u16>() {
            Ok(year) if year > 0 && !title.is_empty() => movies.push(Movie::new(title, year)),
            _ => log::debug!("Skipping watchlist row {}: no usable title or year", i + 1),
        }
    }
    Ok(movies)
}

impl CatalogStore<Movie> for WatchlistStore {
    fn load(&mut self) -> Result<Vec<Movie>, StoreError> {
        let file = File::open(&self.path)?;
        read_watchlist(file)
    }

    fn save(&mut self, items: &[Movie]) -> Result<(), StoreError> {
        for movie in items.iter().filter(|m| m.is_in_desired_format()) {
            log::info!("Streaming: {}", movie);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
