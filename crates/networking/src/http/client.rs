//! Reward page HTTP client with explicit CSRF cookie handling

use super::config::ClientConfig;
use crate::api::ClaimTransport;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, COOKIE, ORIGIN, REFERER},
    Client,
};
use rewards_core::{ClaimRequest, Error, Result, CSRF_COOKIE_NAME};
use tracing::{debug, error, instrument};

/// Raw reward page plus the CSRF session cookie it set
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub body: String,
    pub session_cookie: Option<String>,
}

/// HTTP client for the reward pages and the claim endpoint
///
/// Holds no cookie jar: the session cookie read from the page response is
/// attached explicitly to the claim call.
pub struct RewardsClient {
    http: Client,
    config: ClientConfig,
}

impl RewardsClient {
    /// Create a client from validated settings
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Browser-like headers shared by every request
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers
    }

    /// GET the claim page and capture the `_csrf` cookie it sets
    #[instrument(skip(self))]
    pub async fn fetch_page(&self, url: &str) -> Result<FetchedPage> {
        debug!("Fetching reward page");

        let response = self
            .http
            .get(url)
            .headers(self.default_headers())
            .send()
            .await?;

        debug!("Response status: {}", response.status());

        let response = response.error_for_status().map_err(|e| {
            error!("Reward page request failed: {}", e);
            Error::Transport(e.to_string())
        })?;

        let session_cookie = response
            .cookies()
            .find(|cookie| cookie.name() == CSRF_COOKIE_NAME)
            .map(|cookie| cookie.value().to_string());

        if session_cookie.is_none() {
            debug!("Response did not set the {} cookie", CSRF_COOKIE_NAME);
        }

        let body = response.text().await?;
        debug!("Fetched reward page: {} bytes", body.len());

        Ok(FetchedPage {
            url: url.to_string(),
            body,
            session_cookie,
        })
    }
}

impl ClaimTransport for RewardsClient {
    /// POST the claim and hand back the body whatever the status code
    #[instrument(skip(self, request), fields(option = request.option, id = %request.id))]
    async fn submit_claim(&self, request: &ClaimRequest) -> Result<String> {
        let url = self.config.claim_endpoint();
        let cookie = HeaderValue::from_str(&request.cookie_header())
            .map_err(|e| Error::Transport(format!("invalid session cookie: {}", e)))?;
        let origin = HeaderValue::from_str(self.config.base_url.trim_end_matches('/'))
            .map_err(|e| Error::Config(format!("invalid base URL header: {}", e)))?;

        debug!("Submitting claim to {}", url);

        let response = self
            .http
            .post(&url)
            .headers(self.default_headers())
            .header(COOKIE, cookie)
            .header(ORIGIN, origin.clone())
            .header(REFERER, origin)
            .query(&request.query_pairs())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Claim response: HTTP {}, {} bytes", status, body.len());

        Ok(body)
    }
}
