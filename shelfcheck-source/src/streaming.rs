use shelfcheck_core::MediaItem;
use shelfcheck_match::{CandidateRecord, CandidateSource, MovieIndex};

/// Candidate source answering from a pre-built streaming listing index.
pub struct ListingSource {
    index: MovieIndex,
}

impl ListingSource {
    pub fn new(index: MovieIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &MovieIndex {
        &self.index
    }
}

impl<I: MediaItem + ?Sized> CandidateSource<I> for ListingSource {
    fn find_candidates(&mut self, item: &I) -> Option<Vec<CandidateRecord>> {
        self.index
            .candidates_for(item.title())
            .map(|bucket| bucket.to_vec())
    }
}
