//! Wanted media items: the things a user is waiting to become available.
//!
//! Each domain (library books, streaming movies) supplies one [`MediaItem`]
//! implementation. The pass driver is generic over the trait, so the domain
//! is chosen once at startup rather than inspected per call.

use std::fmt;

use crate::format::Format;

/// Attribution used for movies, which have no author.
pub const STREAMING_ATTRIBUTION: &str = "Streaming";

/// How an item should be compared against catalog search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchProfile<'a> {
    /// Compare title and author on separate axes.
    TitleAndAuthor { title: &'a str, author: &'a str },
    /// Compare a single `title (year)` string; there is no author axis.
    TitleWithYear { title: &'a str, year: u16 },
}

/// Capabilities every wanted item provides.
pub trait MediaItem: fmt::Display {
    fn title(&self) -> &str;

    /// Author, or a fixed attribution for domains without one.
    fn author(&self) -> &str;

    fn format(&self) -> Format;

    /// How search results are scored against this item.
    fn match_profile(&self) -> MatchProfile<'_>;

    /// Would moving to `candidate` improve on the current format?
    fn would_be_upgrade(&self, candidate: Format) -> bool;

    /// Is the item in the single most wanted format for its domain?
    fn is_in_desired_format(&self) -> bool;

    /// Move the item to `format`. `year` is the current calendar year.
    fn upgrade(&mut self, format: Format, year: i32);

    /// Already read or watched; excluded from matching.
    fn is_consumed(&self) -> bool {
        self.format() == Format::AlreadyConsumed
    }

    /// Never checked against a catalog.
    fn is_new(&self) -> bool {
        self.format() == Format::Unknown
    }
}

// ── Book ────────────────────────────────────────────────────────────────────

/// A book on the want list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    author: String,
    title: String,
    /// Who suggested the book, if anyone.
    recommender: Option<String>,
    format: Format,
    /// Status text as stored in the want-list file (e.g. `eBook24`).
    file_tag: String,
}

impl Book {
    /// Create a book whose file tag is decoded into its format.
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        recommender: Option<String>,
        file_tag: impl Into<String>,
    ) -> Self {
        let file_tag = file_tag.into();
        Self {
            author: author.into(),
            title: title.into(),
            recommender: recommender.filter(|r| !r.is_empty()),
            format: Format::from_file(&file_tag),
            file_tag,
        }
    }

    pub fn recommender(&self) -> Option<&str> {
        self.recommender.as_deref()
    }

    pub fn file_tag(&self) -> &str {
        &self.file_tag
    }
}

impl MediaItem for Book {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn format(&self) -> Format {
        self.format
    }

    fn match_profile(&self) -> MatchProfile<'_> {
        MatchProfile::TitleAndAuthor {
            title: &self.title,
            author: &self.author,
        }
    }

    fn would_be_upgrade(&self, candidate: Format) -> bool {
        candidate.outranks(self.format)
    }

    fn is_in_desired_format(&self) -> bool {
        self.format == Format::EBook
    }

    /// Tags are the format's canonical token plus a two-digit year, e.g. `eBook26`.
    fn upgrade(&mut self, format: Format, year: i32) {
        self.format = format;
        self.file_tag = format!("{}{:02}", format.file_tag(), year.rem_euclid(100));
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}. {}", self.author, self.title, self.file_tag)?;
        if let Some(ref recommender) = self.recommender {
            write!(f, " [from {}]", recommender)?;
        }
        Ok(())
    }
}

// ── Movie ───────────────────────────────────────────────────────────────────

/// A movie on the watchlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    title: String,
    year: u16,
    format: Format,
}

impl Movie {
    /// Watchlist movies start out unchecked.
    pub fn new(title: impl Into<String>, year: u16) -> Self {
        Self {
            title: title.into(),
            year,
            format: Format::Unknown,
        }
    }

    pub fn year(&self) -> u16 {
        self.year
    }
}

impl MediaItem for Movie {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        STREAMING_ATTRIBUTION
    }

    fn format(&self) -> Format {
        self.format
    }

    fn match_profile(&self) -> MatchProfile<'_> {
        MatchProfile::TitleWithYear {
            title: &self.title,
            year: self.year,
        }
    }

    /// A fresh sighting always beats whatever was recorded before, so equal
    /// ranks count as an upgrade.
    fn would_be_upgrade(&self, candidate: Format) -> bool {
        self.format.rank() <= candidate.rank()
    }

    fn is_in_desired_format(&self) -> bool {
        self.format == Format::Video
    }

    fn upgrade(&mut self, format: Format, _year: i32) {
        self.format = format;
    }

    fn is_consumed(&self) -> bool {
        false
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Movie '{}' ({})", self.title, self.year)
    }
}

#[cfg(test)]
#[path = "tests/item_tests.rs"]
mod tests;
