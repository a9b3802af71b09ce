use std::thread;
use std::time::{Duration, Instant};

use crate::error::SourceError;

/// Blocking HTTP client that keeps a minimum gap between requests.
pub struct FeedClient {
    http: reqwest::blocking::Client,
    min_interval: Duration,
    last_request: Option<Instant>,
}

impl FeedClient {
    pub fn new(
        user_agent: &str,
        timeout: Duration,
        min_interval: Duration,
    ) -> Result<Self, SourceError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            min_interval,
            last_request: None,
        })
    }

    /// GET `url` with `query` parameters and return the body as text.
    pub fn get_text(&mut self, url: &str, query: &[(&str, String)]) -> Result<String, SourceError> {
        self.rate_limit();

        let resp = self.http.get(url).query(query).send()?;
        self.last_request = Some(Instant::now());

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }

        Ok(resp.text()?)
    }

    /// Wait until at least `min_interval` has passed since the last request.
    fn rate_limit(&self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                thread::sleep(self.min_interval - elapsed);
            }
        }
    }
}
