//! Claim flow over the raw HTTP client
//!
//! Turns a fetched page into a parsed catalog, a catalog selection into a
//! pending claim, and a pending claim into exactly one claim call.

mod claim;
mod page;

pub use claim::*;
pub use page::*;
