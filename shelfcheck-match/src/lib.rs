//! Fuzzy matching of wanted items against catalog search results.
//!
//! Catalog sources hand back loosely structured [`CandidateRecord`]s; the
//! finder scores them by edit distance and reports the closest one as a
//! [`BestMatch`].

pub mod candidate;
pub mod distance;
pub mod finder;
pub mod index;

pub use candidate::{CandidateRecord, CandidateSource, CatalogResult, FeedItem, ListingRow};
pub use distance::{Distance, levenshtein};
pub use finder::{BestMatch, find_best_match, normalize_title};
pub use index::{MovieIndex, title_key};
