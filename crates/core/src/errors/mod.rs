//! Error types and Result alias for the reward claimer

use thiserror::Error;

/// Main error type for the reward claimer
#[derive(Error, Debug)]
pub enum Error {
    /// An embedded token was not found in the page text (template drift or wrong page)
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// The embedded JSON blob is present but lacks required structure or fields
    #[error("Malformed reward catalog: {0}")]
    MalformedCatalog(String),

    /// The supplied URL does not carry a recognizable claim identifier
    #[error("Could not find claim identifier in URL: {0}")]
    ClaimIdentifier(String),

    /// The claim call completed but the body was not the success literal
    #[error("Failed to claim reward, server responded: {body:?}")]
    ClaimFailed { body: String },

    /// Network-level failure from the HTTP collaborator (includes timeouts)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The page response did not carry the CSRF session cookie
    #[error("Session cookie '{0}' was not set by the reward page")]
    MissingSessionCookie(String),

    #[error("Invalid selection {selection}: choose a number between 1 and {available}")]
    InvalidSelection { selection: String, available: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// True when the remote service answered but refused the claim.
    ///
    /// Lets callers tell a business-logic failure apart from a transport failure.
    pub fn is_claim_failure(&self) -> bool {
        matches!(self, Error::ClaimFailed { .. })
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedCatalog(err.to_string())
    }
}
