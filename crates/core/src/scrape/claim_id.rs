//! Claim identifier embedded in the claim page URL

use crate::errors::{Error, Result};
use regex::Regex;

/// Host serving the claim pages
pub const DEFAULT_REWARDS_HOST: &str = "rewards.hypixel.net";

/// Path segment preceding the claim identifier
const CLAIM_PATH: &str = "claim-reward";

/// Number of characters in a claim identifier
pub const CLAIM_ID_LEN: usize = 8;

/// Pulls the claim identifier out of `[scheme://]{host}/claim-reward/{id}[/]` URLs
#[derive(Debug, Clone)]
pub struct ClaimIdResolver {
    pattern: Regex,
}

impl ClaimIdResolver {
    /// Resolver bound to `host`
    ///
    /// Stricter than an 8-character prefix match: the identifier must be
    /// followed by the end of the URL, a `/`, a query or a fragment.
    pub fn new(host: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"^(?:https?://)?{}/{}/([^/?#]{{{}}})/?(?:[?#].*)?$",
            regex::escape(host),
            CLAIM_PATH,
            CLAIM_ID_LEN
        ))
        .map_err(|e| Error::Config(format!("invalid rewards host {:?}: {}", host, e)))?;

        Ok(Self { pattern })
    }

    /// The 8-character identifier, or [`Error::ClaimIdentifier`] when the URL
    /// is not a claim page on this resolver's host
    pub fn resolve<'a>(&self, url: &'a str) -> Result<&'a str> {
        self.pattern
            .captures(url.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| Error::ClaimIdentifier(url.to_string()))
    }
}

impl Default for ClaimIdResolver {
    fn default() -> Self {
        Self::new(DEFAULT_REWARDS_HOST).expect("default rewards host is a valid pattern")
    }
}
