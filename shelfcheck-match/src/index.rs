use std::collections::HashMap;

use crate::candidate::{CandidateRecord, ListingRow};

/// Streaming listing rows bucketed by title prefix.
///
/// Comparing a movie against the whole listing is too slow, and near
/// matches rule out exact-title lookup, so rows are grouped by the first
/// two lower-cased characters of their title.
#[derive(Debug, Default)]
pub struct MovieIndex {
    by_prefix: HashMap<String, Vec<CandidateRecord>>,
    row_count: usize,
}

/// Bucket key for a title: its first two characters, lower-cased.
pub fn title_key(title: &str) -> String {
    title.trim().to_lowercase().chars().take(2).collect()
}

impl MovieIndex {
    /// Build an index from listing rows. Rows missing a title or year are dropped.
    pub fn from_rows(rows: impl IntoIterator<Item = ListingRow>) -> Self {
        let mut index = Self::default();
        for row in rows {
            let key = match (&row.title, &row.year) {
                (Some(title), Some(_)) => title_key(title),
                _ => continue,
            };
            index
                .by_prefix
                .entry(key)
                .or_default()
                .push(CandidateRecord::Listing(row));
            index.row_count += 1;
        }
        index
    }

    /// Rows sharing the title key of `title`, if any.
    pub fn candidates_for(&self, title: &str) -> Option<&[CandidateRecord]> {
        self.by_prefix.get(&title_key(title)).map(|v| v.as_slice())
    }

    /// Number of indexed rows.
    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}
