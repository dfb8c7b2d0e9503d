//! Text-pattern scraping of the reward page and its URL

mod claim_id;
mod page;

pub use claim_id::{ClaimIdResolver, CLAIM_ID_LEN, DEFAULT_REWARDS_HOST};
pub use page::{extract_app_data, extract_csrf_token};
