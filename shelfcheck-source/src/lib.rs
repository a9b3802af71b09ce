//! Catalog sources: where candidate records come from.
//!
//! - [`LibraryFeedSource`] searches a public library's RSS feed over HTTP.
//! - [`ListingSource`] answers from a streaming listing loaded up front.

pub mod client;
pub mod error;
pub mod library;
pub mod listing;
pub mod rss;
pub mod streaming;

pub use client::FeedClient;
pub use error::SourceError;
pub use library::LibraryFeedSource;
pub use listing::{load_movie_index, parse_listing};
pub use rss::parse_feed;
pub use streaming::ListingSource;
