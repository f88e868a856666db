//! Wire shapes of the leaderboard export.
//!
//! These mirror the JSON document one-to-one. Members are kept as raw values
//! at the top level so each one can be validated separately and its id
//! attached to any error.

use std::collections::BTreeMap;

use serde::de::{self, Deserializer, Unexpected};
use serde::Deserialize;

use crate::calendar::PART_INDICES;

#[derive(Debug, Deserialize)]
pub(crate) struct RawLeaderboard {
    pub event: String,
    pub members: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMember {
    pub local_score: i64,
    #[serde(deserialize_with = "epoch_seconds")]
    pub last_star_ts: i64,
    pub global_score: i64,
    pub stars: u32,
    pub name: String,
    pub completion_day_level: BTreeMap<String, RawDay>,
}

/// Per-day object. Keys other than `"1"` and `"2"` are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawDay {
    #[serde(rename = "1")]
    pub first: Option<RawPart>,
    #[serde(rename = "2")]
    pub second: Option<RawPart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPart {
    #[serde(deserialize_with = "epoch_seconds")]
    pub get_star_ts: i64,
    pub star_index: u64,
}

impl RawDay {
    /// Present parts paired with their index, in part order.
    pub fn into_parts(self) -> impl Iterator<Item = (u32, RawPart)> {
        PART_INDICES
            .into_iter()
            .zip([self.first, self.second])
            .filter_map(|(index, part)| part.map(|part| (index, part)))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EpochSeconds {
    Number(i64),
    Text(String),
}

/// Accept epoch seconds as a JSON integer or as a string holding one.
fn epoch_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match EpochSeconds::deserialize(deserializer) {
        Ok(EpochSeconds::Number(value)) => Ok(value),
        Ok(EpochSeconds::Text(text)) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::invalid_value(Unexpected::Str(&text), &"epoch seconds")),
        Err(_) => Err(de::Error::custom(
            "expected epoch seconds as an integer or numeric string",
        )),
    }
}
