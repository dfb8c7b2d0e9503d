//! Client configuration, scoped to one run

use reqwest::Url;
use rewards_core::{Error, Result, DEFAULT_REWARDS_HOST};
use std::time::Duration;

/// Default request timeout; a timed-out call surfaces as a transport error
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Use a real browser User-Agent to avoid being blocked
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Settings handed to [`crate::RewardsClient`] at construction
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host serving the claim pages, e.g. `https://rewards.hypixel.net`
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: format!("https://{}", DEFAULT_REWARDS_HOST),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default settings pointed at another base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reject settings the client cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be greater than zero".to_string()));
        }
        self.host()?;
        Ok(())
    }

    /// Host (with a non-default port) that claim page URLs must live on
    pub fn host(&self) -> Result<String> {
        let url = self.parsed_base_url()?;
        let host = url
            .host_str()
            .ok_or_else(|| Error::Config(format!("base URL has no host: {}", self.base_url)))?;

        Ok(match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        })
    }

    /// `{base_url}/claim-reward/claim`
    pub fn claim_endpoint(&self) -> String {
        format!("{}/claim-reward/claim", self.base_url.trim_end_matches('/'))
    }

    /// `url` with the base URL's scheme prepended when it has none
    pub fn absolute_url(&self, url: &str) -> Result<String> {
        let url = url.trim();
        if url.contains("://") {
            return Ok(url.to_string());
        }
        let base = self.parsed_base_url()?;
        Ok(format!("{}://{}", base.scheme(), url))
    }

    fn parsed_base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {:?}: {}", self.base_url, e)))
    }
}
