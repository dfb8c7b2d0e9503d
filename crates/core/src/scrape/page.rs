//! Locate embedded client-side state in the raw reward page

use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static APP_DATA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"window\.appData = '(.+)';").expect("failed to compile app data regex")
});

static SECURITY_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"window\.securityToken = "(.+)";"#)
        .expect("failed to compile security token regex")
});

/// JSON blob assigned to `window.appData`, exactly as quoted in the page.
///
/// First occurrence wins.
pub fn extract_app_data(page: &str) -> Result<&str> {
    capture(&APP_DATA_RE, page)
        .ok_or_else(|| Error::Extraction("could not find app data string".to_string()))
}

/// CSRF token assigned to `window.securityToken`.
pub fn extract_csrf_token(page: &str) -> Result<&str> {
    capture(&SECURITY_TOKEN_RE, page)
        .ok_or_else(|| Error::Extraction("could not find CSRF token string".to_string()))
}

fn capture<'a>(pattern: &Regex, page: &'a str) -> Option<&'a str> {
    pattern
        .captures(page)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
