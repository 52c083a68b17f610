//! HTTP client for the upstream region lookup service.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::scrape::{extract_from_json, extract_from_text};
use crate::domain::entities::CountryCode;
use crate::domain::errors::UpstreamError;
use crate::domain::lookup::RegionLookup;
use crate::utils::uri::encode_path_segment;

/// Number of body characters included in debug logs.
const LOG_PREVIEW_CHARS: usize = 200;

/// Queries `GET <base_url>/<encoded query>` and scrapes a code from the body.
///
/// # Response Handling
///
/// - Non-2xx status: [`UpstreamError::Status`]
/// - `application/json`: `data.country_code`, then a scrape of the whole document
/// - Anything else: text scrape, HTML scrape, then a bare two-letter body
///
/// The client-level timeout covers connect, headers and body. The resolver
/// applies its own deadline on top.
#[derive(Debug, Clone)]
pub struct HttpRegionLookup {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpRegionLookup {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            timeout,
        })
    }

    /// Full request URL for a query.
    pub fn request_url(&self, query: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            encode_path_segment(query)
        )
    }

    fn map_error(&self, e: reqwest::Error) -> UpstreamError {
        if e.is_timeout() {
            UpstreamError::Timeout(self.timeout)
        } else if e.is_decode() {
            UpstreamError::Unextractable
        } else {
            UpstreamError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl RegionLookup for HttpRegionLookup {
    async fn fetch_code(&self, query: &str) -> Result<CountryCode, UpstreamError> {
        let url = self.request_url(query);
        debug!("Fetching region from {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json, text/plain")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("External API error: {}", status);
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if content_type.contains("application/json") {
            let json: Value = response.json().await.map_err(|e| self.map_error(e))?;
            debug!("Received JSON response: {}", preview(&json.to_string()));

            extract_from_json(&json).ok_or(UpstreamError::Unextractable)
        } else {
            let body = response.text().await.map_err(|e| self.map_error(e))?;
            debug!("Received text response: {}", preview(&body));

            extract_from_text(&body).ok_or(UpstreamError::Unextractable)
        }
    }
}

fn preview(body: &str) -> String {
    body.chars().take(LOG_PREVIEW_CHARS).collect()
}
