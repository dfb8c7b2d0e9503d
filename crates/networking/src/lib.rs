//! Rewards Networking - HTTP client and claim flow over the reward pages

pub mod api;
pub mod http;

pub use api::{claim_reward, load_reward_page, ClaimTransport, PendingClaim, RewardPage};
pub use http::{ClientConfig, FetchedPage, RewardsClient, DEFAULT_TIMEOUT_SECS};
