//! API Configuration
//!
//! Where the backend lives and how long to wait before refreshing after a
//! "track all" request.

use std::time::Duration;

use crate::api::Endpoint;

/// One-shot refresh delay after `POST /api/track-all`
pub const DEFAULT_TRACK_ALL_REFRESH_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin of the backend, without a trailing slash
    pub base_url: String,
    pub track_all_refresh_delay: Duration,
}

impl ApiConfig {
    /// Use `configured` when it is set and non-blank, else the page origin
    pub fn resolve(configured: Option<&str>, origin: &str) -> Self {
        let base = configured
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(origin);
        Self {
            base_url: base.trim_end_matches('/').to_string(),
            track_all_refresh_delay: DEFAULT_TRACK_ALL_REFRESH_DELAY,
        }
    }

    pub fn url(&self, endpoint: &Endpoint<'_>) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}
