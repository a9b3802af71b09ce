//! Best-match search over a catalog's candidate records.

use std::fmt;

use shelfcheck_core::{Format, MatchProfile, MediaItem};

use crate::candidate::CandidateRecord;
use crate::distance::{Distance, levenshtein};

/// The closest catalog result found for one wanted item.
pub struct BestMatch<'a, I: ?Sized> {
    /// The item that was searched for.
    pub desired: &'a I,
    /// Title of the winning record, as printed by the catalog.
    pub title: Option<String>,
    pub title_distance: Distance,
    /// Closest author on the winning record.
    pub author: Option<String>,
    /// Always `Finite(0)` for domains without an author axis.
    pub author_distance: Distance,
    /// Highest-ranked format reported by any candidate.
    pub format: Format,
}

impl<I: MediaItem + ?Sized> fmt::Display for BestMatch<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "title={} ({}), author={} ({}), format={}",
            self.title.as_deref().unwrap_or("-"),
            self.title_distance,
            self.author.as_deref().unwrap_or("-"),
            self.author_distance,
            self.format,
        )
    }
}

impl<I: MediaItem + ?Sized> fmt::Debug for BestMatch<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BestMatch")
            .field("desired", &self.desired.to_string())
            .field("title", &self.title)
            .field("title_distance", &self.title_distance)
            .field("author", &self.author)
            .field("author_distance", &self.author_distance)
            .field("format", &self.format)
            .finish()
    }
}

/// Normalize a wanted title for comparison.
///
/// Subtitles (everything from the first `:`) are dropped because catalogs
/// place them inconsistently. The rest is trimmed and lower-cased.
pub fn normalize_title(title: &str) -> String {
    let main = match title.find(':') {
        Some(pos) => &title[..pos],
        None => title,
    };
    normalize(main)
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Find the candidate that best matches `desired`.
///
/// Returns `None` only when there are no candidates at all. A record that
/// lacks a title or author counts as infinitely far on that axis but still
/// contributes its formats.
///
/// Running minima are kept per axis across every record. A record takes over
/// as the winner only when it is no worse than those minima on both axes,
/// so a later record wins ties.
pub fn find_best_match<'a, I: MediaItem + ?Sized>(
    desired: &'a I,
    candidates: &[CandidateRecord],
) -> Option<BestMatch<'a, I>> {
    if candidates.is_empty() {
        return None;
    }

    let (wanted_title, wanted_author) = match desired.match_profile() {
        MatchProfile::TitleAndAuthor { title, author } => {
            (normalize_title(title), Some(normalize(author)))
        }
        MatchProfile::TitleWithYear { title, year } => {
            (normalize(&format!("{} ({})", title.trim(), year)), None)
        }
    };
    let no_author_axis = Distance::Finite(0);

    let mut best = BestMatch {
        desired,
        title: None,
        title_distance: Distance::Infinite,
        author: None,
        author_distance: if wanted_author.is_some() {
            Distance::Infinite
        } else {
            no_author_axis
        },
        format: Format::NotAvailable,
    };
    let mut min_title = best.title_distance;
    let mut min_author = best.author_distance;

    for record in candidates {
        let (title, title_distance) = match record.title() {
            Some(text) => {
                let text = text.trim().to_string();
                let d = levenshtein(&wanted_title, &normalize(&text));
                (Some(text), Distance::Finite(d))
            }
            None => (None, Distance::Infinite),
        };

        let (author, author_distance) = match wanted_author {
            Some(ref wanted) => closest_author(wanted, &record.authors()),
            None => (None, no_author_axis),
        };

        for format in record.formats() {
            if format.outranks(best.format) {
                best.format = format;
            }
        }

        log::trace!(
            "candidate {:?}: title {} / author {}",
            title,
            title_distance,
            author_distance
        );

        let wins = title_distance <= min_title && author_distance <= min_author;
        min_title = min_title.min(title_distance);
        min_author = min_author.min(author_distance);

        if wins {
            best.title = title;
            best.title_distance = title_distance;
            best.author = author;
            best.author_distance = author_distance;
        }
    }

    Some(best)
}

/// Closest of a record's authors to the wanted one; the first wins ties.
fn closest_author(wanted: &str, authors: &[&str]) -> (Option<String>, Distance) {
    let mut closest = (None, Distance::Infinite);
    for author in authors {
        let author = author.trim();
        let d = Distance::Finite(levenshtein(wanted, &normalize(author)));
        if d < closest.1 {
            closest = (Some(author.to_string()), d);
        }
    }
    closest
}

#[cfg(test)]
#[path = "tests/finder_tests.rs"]
mod tests;
