use std::time::Duration;

use crate::app::domain::{AppSettings, DigestSection, FetchOutcome};
use crate::app::infrastructure::error::FetchError;

const USER_AGENT: &str = concat!("NewsDigest/", env!("CARGO_PKG_VERSION"));

/// Fetches digest sections from one fixed URL.
#[derive(Debug, Clone)]
pub struct DigestFetcher {
    url: String,
    timeout: Duration,
}

impl DigestFetcher {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.sections_url(), settings.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One attempt, no retry. Any non-2xx status is a failure.
    pub fn fetch(&self) -> Result<Vec<DigestSection>, FetchError> {
        let response = minreq::get(&self.url)
            .with_header("User-Agent", USER_AGENT)
            .with_header("Accept", "application/json")
            .with_timeout(self.timeout.as_secs().max(1))
            .send()?;

        if !(200..300).contains(&response.status_code) {
            return Err(FetchError::Status(response.status_code));
        }

        let body = response
            .as_str()
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Run [`fetch`](Self::fetch) and fold the result into a terminal outcome.
    pub fn fetch_sections(&self) -> FetchOutcome {
        match self.fetch() {
            Ok(sections) => {
                tracing::info!(url = %self.url, count = sections.len(), "digest sections fetched");
                FetchOutcome::Ready(sections)
            }
            Err(e) => {
                tracing::warn!(url = %self.url, error = %e, "digest fetch failed");
                FetchOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_uses_sections_path() {
        let settings = AppSettings {
            endpoint: "http://digest.local:8000/".to_string(),
            request_timeout_secs: 4,
            ..Default::default()
        };
        let fetcher = DigestFetcher::from_settings(&settings);
        assert_eq!(fetcher.url(), "http://digest.local:8000/api/digests/sections/");
        assert_eq!(fetcher.timeout, Duration::from_secs(4));
    }

    #[test]
    fn test_unreachable_host_fails() {
        // Port 9 (discard) on loopback is essentially never listening.
        let fetcher = DigestFetcher::new("http://127.0.0.1:9/api/digests/sections/", Duration::from_secs(2));
        match fetcher.fetch_sections() {
            FetchOutcome::Failed(message) => assert!(message.starts_with("Failed to reach digest service")),
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
