//! HTTP client and its configuration

mod client;
mod config;

pub use client::{FetchedPage, RewardsClient};
pub use config::{ClientConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
