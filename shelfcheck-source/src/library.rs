use shelfcheck_core::MediaItem;
use shelfcheck_match::{CandidateRecord, CandidateSource};

use crate::client::FeedClient;
use crate::rss;

/// RSS search endpoint for a library id.
pub fn feed_url(library: &str) -> String {
    format!(
        "https://gateway.bibliocommons.com/v2/libraries/{}/rss/search",
        library
    )
}

/// Query parameters for a title search restricted to books and eBooks.
///
/// The catalog matches poorly on subtitles, so only the text before the
/// first `:` is sent.
pub fn search_params(title: &str) -> Vec<(&'static str, String)> {
    let query = title.split(':').next().unwrap_or(title).trim();
    vec![
        ("custom_edit", "false".to_string()),
        ("suppress", "true".to_string()),
        ("f_FORMAT", "EBOOK|BK".to_string()),
        ("searchType", "title".to_string()),
        ("query", query.to_string()),
    ]
}

/// Candidate source backed by a public library's RSS search feed.
pub struct LibraryFeedSource {
    client: FeedClient,
    url: String,
}

impl LibraryFeedSource {
    pub fn new(client: FeedClient, library: &str) -> Self {
        Self {
            client,
            url: feed_url(library),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<I: MediaItem + ?Sized> CandidateSource<I> for LibraryFeedSource {
    fn find_candidates(&mut self, item: &I) -> Option<Vec<CandidateRecord>> {
        if item.is_consumed() {
            return None;
        }

        let params = search_params(item.title());
        let body = match self.client.get_text(&self.url, &params) {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Catalog search for '{}' failed: {}", item.title(), e);
                return None;
            }
        };

        match rss::parse_feed(&body) {
            Ok(items) => {
                log::debug!("{} feed items for '{}'", items.len(), item.title());
                Some(items.into_iter().map(CandidateRecord::from).collect())
            }
            Err(e) => {
                log::warn!("Unreadable catalog feed for '{}': {}", item.title(), e);
                None
            }
        }
    }
}
