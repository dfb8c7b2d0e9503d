//! Rewards Core - Reward catalog models, page scraping, and errors

pub mod errors;
pub mod models;
pub mod scrape;

pub use errors::{Error, Result};
pub use models::*;
pub use scrape::*;
