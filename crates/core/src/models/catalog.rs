//! Ordered reward catalog decoded from the page's embedded app data

use super::reward::{RawReward, Reward};
use crate::errors::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Rewards in the order the page lists them.
///
/// `ordinal` of each entry equals its index here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardCatalog {
    rewards: Vec<Reward>,
}

impl RewardCatalog {
    /// Decode the JSON blob assigned to the page's app data variable.
    ///
    /// Requires a non-empty `rewards` array whose entries all carry
    /// `rarity` and `reward`.
    pub fn parse(blob: &str) -> Result<Self> {
        let data: Value = serde_json::from_str(blob)?;

        let entries = data
            .get("rewards")
            .ok_or_else(|| Error::MalformedCatalog("missing `rewards` key".to_string()))?
            .as_array()
            .ok_or_else(|| Error::MalformedCatalog("`rewards` is not a list".to_string()))?;

        if entries.is_empty() {
            return Err(Error::MalformedCatalog("`rewards` list is empty".to_string()));
        }

        let rewards = entries
            .iter()
            .enumerate()
            .map(|(ordinal, entry)| {
                if !entry.is_object() {
                    return Err(Error::MalformedCatalog(format!(
                        "reward #{} is not an object",
                        ordinal
                    )));
                }
                let raw = RawReward::deserialize(entry).map_err(|e| {
                    Error::MalformedCatalog(format!("reward #{}: {}", ordinal, e))
                })?;
                Ok(Reward::from_raw(raw, ordinal))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("Parsed reward catalog with {} entries", rewards.len());
        Ok(Self { rewards })
    }

    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reward> {
        self.rewards.iter()
    }

    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    /// Look up a reward by zero-based ordinal
    pub fn get(&self, ordinal: usize) -> Option<&Reward> {
        self.rewards.get(ordinal)
    }

    /// Resolve an operator's 1-based choice to a reward
    pub fn select(&self, choice: usize) -> Result<&Reward> {
        choice
            .checked_sub(1)
            .and_then(|ordinal| self.get(ordinal))
            .ok_or_else(|| Error::InvalidSelection {
                selection: choice.to_string(),
                available: self.len(),
            })
    }

    /// Numbered listing, one line per reward, starting at 1
    pub fn listing(&self) -> Vec<String> {
        self.rewards
            .iter()
            .enumerate()
            .map(|(index, reward)| reward.listing_line(index + 1))
            .collect()
    }
}
