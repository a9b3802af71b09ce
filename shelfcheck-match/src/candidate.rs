//! Raw search results returned by a catalog source.
//!
//! Sources return results in different shapes (an HTML results page, an RSS
//! feed, a listing table). [`CandidateRecord`] wraps each shape and exposes
//! the same field accessors, so the finder never inspects which one it has.

use std::borrow::Cow;

use shelfcheck_core::Format;

/// One result from a catalog's HTML search page, already pulled out of the markup.
///
/// No source in this workspace scrapes HTML. Callers that do build these and
/// hand them to [`find_best_match`](crate::find_best_match) as
/// [`CandidateRecord::Catalog`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogResult {
    pub title: Option<String>,
    /// Every author link shown on the result.
    pub authors: Vec<String>,
    /// Format indicator badges (`eBook`, `Book`, ...).
    pub formats: Vec<String>,
}

/// One `<item>` from a catalog's RSS search feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedItem {
    pub title: Option<String>,
    /// `<dc:creator>`
    pub creator: Option<String>,
    pub format: Option<String>,
}

/// One row of a streaming service's title listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingRow {
    pub title: Option<String>,
    /// Year of release, as printed in the listing.
    pub year: Option<String>,
}

/// A candidate search result of any supported shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateRecord {
    Catalog(CatalogResult),
    Feed(FeedItem),
    Listing(ListingRow),
}

impl CandidateRecord {
    /// Title text to compare against.
    ///
    /// Listing rows fold their year into the title as `title (year)` and
    /// have no title unless both fields are present.
    pub fn title(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Catalog(r) => r.title.as_deref().map(Cow::Borrowed),
            Self::Feed(r) => r.title.as_deref().map(Cow::Borrowed),
            Self::Listing(r) => match (r.title.as_deref(), r.year.as_deref()) {
                (Some(title), Some(year)) => {
                    Some(Cow::Owned(format!("{} ({})", title.trim(), year.trim())))
                }
                _ => None,
            },
        }
    }

    /// Author texts; empty when the record has none.
    pub fn authors(&self) -> Vec<&str> {
        match self {
            Self::Catalog(r) => r.authors.iter().map(String::as_str).collect(),
            Self::Feed(r) => r.creator.as_deref().into_iter().collect(),
            Self::Listing(_) => Vec::new(),
        }
    }

    /// Formats this record reports, decoded from the source vocabulary.
    ///
    /// A listing row is by definition streamable, so it reports `Video`
    /// whenever it is complete enough to compare.
    pub fn formats(&self) -> Vec<Format> {
        match self {
            Self::Catalog(r) => r.formats.iter().map(|t| Format::from_source(t.trim())).collect(),
            Self::Feed(r) => r
                .format
                .as_deref()
                .map(|t| Format::from_source(t.trim()))
                .into_iter()
                .collect(),
            Self::Listing(_) => {
                if self.title().is_some() {
                    vec![Format::Video]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

impl From<CatalogResult> for CandidateRecord {
    fn from(r: CatalogResult) -> Self {
        Self::Catalog(r)
    }
}

impl From<FeedItem> for CandidateRecord {
    fn from(r: FeedItem) -> Self {
        Self::Feed(r)
    }
}

impl From<ListingRow> for CandidateRecord {
    fn from(r: ListingRow) -> Self {
        Self::Listing(r)
    }
}

/// Something that can look up catalog candidates for a wanted item.
///
/// `None` means the source had nothing to offer (lookup failed or the item
/// is not searchable), which is distinct from an empty result list.
pub trait CandidateSource<I: ?Sized> {
    fn find_candidates(&mut self, item: &I) -> Option<Vec<CandidateRecord>>;
}
