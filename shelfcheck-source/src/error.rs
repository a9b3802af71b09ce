/// Errors that can occur while fetching or parsing catalog results.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid listing: {0}")]
    InvalidListing(String),
}

impl SourceError {
    pub fn invalid_listing(msg: impl Into<String>) -> Self {
        Self::InvalidListing(msg.into())
    }
}
