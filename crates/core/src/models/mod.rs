//! Data models for the reward catalog and claim call

mod catalog;
mod claim;
mod reward;

pub use catalog::*;
pub use claim::*;
pub use reward::*;
