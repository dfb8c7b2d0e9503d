//! Claim credentials and the request sent to the claim endpoint

use super::reward::Reward;

/// Body the claim endpoint returns when, and only when, the claim went through
pub const CLAIM_SUCCESS_BODY: &str = "reward claimed";

/// Name of the cookie the claim endpoint validates the CSRF token against
pub const CSRF_COOKIE_NAME: &str = "_csrf";

/// Credentials for one claim attempt, built fresh per run
#[derive(Clone, PartialEq, Eq)]
pub struct ClaimContext {
    claim_id: String,
    csrf_token: String,
    session_cookie: String,
}

impl ClaimContext {
    pub fn new(
        claim_id: impl Into<String>,
        csrf_token: impl Into<String>,
        session_cookie: impl Into<String>,
    ) -> Self {
        Self {
            claim_id: claim_id.into(),
            csrf_token: csrf_token.into(),
            session_cookie: session_cookie.into(),
        }
    }

    /// 8-character identifier taken from the claim page URL
    pub fn claim_id(&self) -> &str {
        &self.claim_id
    }

    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    pub fn session_cookie(&self) -> &str {
        &self.session_cookie
    }
}

// Keep secrets out of logs
impl std::fmt::Debug for ClaimContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimContext")
            .field("claim_id", &self.claim_id)
            .field("csrf_token", &format_args!("<{} chars>", self.csrf_token.len()))
            .field("session_cookie", &format_args!("<{} chars>", self.session_cookie.len()))
            .finish()
    }
}

/// Parameters of the claim call for one selected reward
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRequest {
    pub option: usize,
    pub id: String,
    pub active_ad: u8,
    pub csrf_token: String,
    pub watched_fallback: bool,
    pub session_cookie: String,
}

impl ClaimRequest {
    pub fn new(reward: &Reward, context: &ClaimContext) -> Self {
        Self {
            option: reward.ordinal(),
            id: context.claim_id().to_string(),
            active_ad: 1,
            csrf_token: context.csrf_token().to_string(),
            watched_fallback: false,
            session_cookie: context.session_cookie().to_string(),
        }
    }

    /// Query parameters in the order the endpoint expects them
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("option", self.option.to_string()),
            ("id", self.id.clone()),
            ("activeAd", self.active_ad.to_string()),
            ("_csrf", self.csrf_token.clone()),
            ("watchedFallback", self.watched_fallback.to_string()),
        ]
    }

    /// Value for the `Cookie` header
    pub fn cookie_header(&self) -> String {
        format!("{}={}", CSRF_COOKIE_NAME, self.session_cookie)
    }
}

/// True only for the exact success literal; no trimming, no case folding
pub fn is_claim_success(body: &str) -> bool {
    body == CLAIM_SUCCESS_BODY
}
