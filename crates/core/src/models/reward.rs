//! Reward records decoded from the embedded catalog

use serde::{Deserialize, Serialize};

/// Quantity used when the catalog entry carries no `amount`
pub const DEFAULT_AMOUNT: i64 = 1;

/// One catalog entry as the page encodes it.
///
/// `rarity` and `reward` are mandatory; the rest fall back to defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReward {
    pub rarity: String,
    pub reward: String,
    #[serde(default = "default_amount", deserialize_with = "deserialize_amount")]
    pub amount: i64,
    #[serde(default)]
    pub game_type: Option<RawLabel>,
    #[serde(default)]
    pub package: Option<RawLabel>,
}

/// Optional display field; only text gets normalized, other scalars pass through
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawLabel {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl RawLabel {
    fn normalized(&self) -> String {
        match self {
            RawLabel::Text(text) => normalize(text),
            RawLabel::Number(number) => number.to_string(),
            RawLabel::Flag(flag) => flag.to_string(),
        }
    }
}

fn default_amount() -> i64 {
    DEFAULT_AMOUNT
}

/// Deserialize an amount that may arrive as a number, a numeric string, or null
fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de;

    struct AmountVisitor;

    impl<'de> de::Visitor<'de> for AmountVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("an integer amount, numeric string, or null")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<i64, E> {
            i64::try_from(v).map_err(de::Error::custom)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<i64, E> {
            v.trim().parse::<i64>().map_err(de::Error::custom)
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<i64, E> {
            Ok(DEFAULT_AMOUNT)
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<i64, E> {
            Ok(DEFAULT_AMOUNT)
        }
    }

    deserializer.deserialize_any(AmountVisitor)
}

/// A claimable offer, normalized for display.
///
/// Built once while parsing the catalog and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reward {
    rarity: String,
    reward_type: String,
    amount: i64,
    game: Option<String>,
    package: Option<String>,
    ordinal: usize,
}

impl Reward {
    /// Normalize a raw entry found at `ordinal` in the catalog
    pub fn from_raw(raw: RawReward, ordinal: usize) -> Self {
        Self {
            rarity: normalize(&raw.rarity),
            reward_type: normalize(&raw.reward),
            amount: raw.amount,
            game: raw.game_type.as_ref().map(RawLabel::normalized),
            package: raw.package.as_ref().map(RawLabel::normalized),
            ordinal,
        }
    }

    pub fn rarity(&self) -> &str {
        &self.rarity
    }

    pub fn reward_type(&self) -> &str {
        &self.reward_type
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn game(&self) -> Option<&str> {
        self.game.as_deref()
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// Zero-based catalog position, sent as the `option` claim parameter
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Game, package and reward type, skipping the absent ones
    pub fn display_name(&self) -> String {
        [self.game(), self.package(), Some(self.reward_type())]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Numbered line shown to the operator, e.g. `1. [Common] 100x Coins`
    pub fn listing_line(&self, index: usize) -> String {
        format!("{}. {}", index, self)
    }
}

impl std::fmt::Display for Reward {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}x {}", self.rarity, self.amount, self.display_name())
    }
}

/// Replace underscores with spaces and uppercase the first character.
///
/// Only the first character changes case; `"active_BOOST"` becomes `"Active BOOST"`.
pub fn normalize(value: &str) -> String {
    let spaced = value.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
