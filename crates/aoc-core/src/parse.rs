//! Leaderboard export parsing: JSON document → typed [`Leaderboard`].
//!
//! Validation happens here rather than at point of use. A document that parses
//! successfully has every required field present with the right type, days
//! sorted ascending by index, parts sorted by part index, and members sorted by
//! lower-cased name (ties by id).

use std::path::Path;

use crate::calendar::from_epoch_seconds;
use crate::entities::{Day, Leaderboard, Member, Part};
use crate::errors::ParseError;
use crate::wire::{RawLeaderboard, RawMember};

/// Read and parse a leaderboard export from disk.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if the file cannot be read, otherwise any error
/// from [`parse_leaderboard`].
pub fn load_leaderboard(path: &Path) -> Result<Leaderboard, ParseError> {
    let document = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = document.len(), "read leaderboard export");
    parse_leaderboard(&document)
}

/// Parse a leaderboard export document.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the offending member and field when any
/// required field is missing or mistyped.
pub fn parse_leaderboard(document: &str) -> Result<Leaderboard, ParseError> {
    let mut deserializer = serde_json::Deserializer::from_str(document);
    let raw: RawLeaderboard =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|error| {
            ParseError::Json {
                path: error.path().to_string(),
                source: error.into_inner(),
            }
        })?;
    deserializer.end().map_err(|source| ParseError::Json {
        path: ".".to_string(),
        source,
    })?;

    let year = raw
        .event
        .trim()
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidEvent(raw.event.clone()))?;

    let mut members = raw
        .members
        .into_iter()
        .map(|(id, value)| parse_member(&id, value))
        .collect::<Result<Vec<_>, _>>()?;
    members.sort_by_cached_key(Member::sort_key);

    tracing::debug!(year, members = members.len(), "parsed leaderboard");
    Ok(Leaderboard { year, members })
}

fn parse_member(key: &str, value: serde_json::Value) -> Result<Member, ParseError> {
    let id = key
        .trim()
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidMemberId(key.to_string()))?;

    let raw: RawMember = serde_path_to_error::deserialize(value).map_err(|error| {
        ParseError::Member {
            id: key.to_string(),
            path: error.path().to_string(),
            source: error.into_inner(),
        }
    })?;

    let last_star =
        from_epoch_seconds(raw.last_star_ts).ok_or_else(|| ParseError::TimestampOutOfRange {
            member_id: id,
            field: "last_star_ts",
            value: raw.last_star_ts,
        })?;

    let mut days = Vec::with_capacity(raw.completion_day_level.len());
    for (day_key, raw_day) in raw.completion_day_level {
        let index = day_key
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidDayKey {
                member_id: id,
                key: day_key.clone(),
            })?;
        // "01" and "1" are distinct map keys naming the same day.
        if days.iter().any(|day: &Day| day.index == index) {
            return Err(ParseError::DuplicateDay {
                member_id: id,
                key: day_key,
                day: index,
            });
        }

        let parts = raw_day
            .into_parts()
            .map(|(part_index, raw_part)| {
                let get_star = from_epoch_seconds(raw_part.get_star_ts).ok_or_else(|| {
                    ParseError::TimestampOutOfRange {
                        member_id: id,
                        field: "get_star_ts",
                        value: raw_part.get_star_ts,
                    }
                })?;
                Ok(Part {
                    index: part_index,
                    get_star,
                    star_index: raw_part.star_index,
                })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;

        days.push(Day { index, parts });
    }
    // Map keys sort as strings ("10" < "2"), so order numerically here.
    days.sort_by_key(|day| day.index);

    let member = Member {
        id,
        name: raw.name,
        local_score: raw.local_score,
        global_score: raw.global_score,
        stars: raw.stars,
        last_star,
        days,
    };

    let observed = member.completed_parts();
    if observed != member.stars as usize {
        tracing::warn!(
            member = id,
            declared = member.stars,
            observed,
            "declared star count disagrees with completed parts"
        );
    }
    tracing::debug!(member = id, name = %member.name, days = member.days.len(), "parsed member");

    Ok(member)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn member_json(name: &str, days: serde_json::Value) -> serde_json::Value {
        json!({
            "local_score": 10,
            "last_star_ts": 1_701_497_400,
            "global_score": 0,
            "stars": 2,
            "name": name,
            "id": 1,
            "completion_day_level": days,
        })
    }

    fn document(members: serde_json::Value) -> String {
        json!({"event": "2023", "owner_id": 1, "members": members}).to_string()
    }

    #[test]
    fn days_are_sorted_numerically() {
        let doc = document(json!({
            "7": member_json("Ada", json!({
                "10": {"1": {"get_star_ts": 1_702_184_400, "star_index": 5}},
                "2": {"1": {"get_star_ts": 1_701_495_000, "star_index": 1}},
                "9": {"1": {"get_star_ts": 1_702_098_000, "star_index": 3}},
            })),
        }));
        let board = parse_leaderboard(&doc).expect("parses");
        let indices: Vec<u32> = board.members[0].days.iter().map(|d| d.index).collect();
        assert_eq!(indices, vec![2, 9, 10]);
    }

    #[test]
    fn timestamps_are_read_at_utc() {
        let doc = document(json!({
            "7": member_json("Ada", json!({
                "1": {"1": {"get_star_ts": 1_701_495_000, "star_index": 1}},
            })),
        }));
        let board = parse_leaderboard(&doc).expect("parses");
        let star = board.members[0].days[0].parts[0].get_star;
        assert_eq!((star.day(), star.hour(), star.minute()), (2, 5, 30));
    }

    #[test]
    fn members_sorted_case_insensitively_then_by_id() {
        let doc = document(json!({
            "30": member_json("bob", json!({})),
            "20": member_json("Alice", json!({})),
            "10": member_json("bob", json!({})),
            "40": member_json("Carol", json!({})),
        }));
        let board = parse_leaderboard(&doc).expect("parses");
        let order: Vec<(String, u64)> = board
            .members
            .iter()
            .map(|m| (m.name.clone(), m.id))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Alice".to_string(), 20),
                ("bob".to_string(), 10),
                ("bob".to_string(), 30),
                ("Carol".to_string(), 40),
            ]
        );
    }

    #[test]
    fn missing_field_names_member_and_field() {
        let doc = document(json!({
            "42": {
                "local_score": 1,
                "last_star_ts": 0,
                "global_score": 0,
                "stars": 0,
                "completion_day_level": {},
            },
        }));
        let error = parse_leaderboard(&doc).expect_err("name is missing");
        let ParseError::Member { id, source, .. } = &error else {
            panic!("unexpected error: {error}");
        };
        assert_eq!(id, "42");
        assert!(source.to_string().contains("name"), "{source}");
    }

    #[test]
    fn mistyped_nested_field_reports_path() {
        let doc = document(json!({
            "42": member_json("Ada", json!({
                "3": {"2": {"get_star_ts": 1_701_495_000, "star_index": "first"}},
            })),
        }));
        let error = parse_leaderboard(&doc).expect_err("star_index is mistyped");
        let ParseError::Member { id, path, .. } = &error else {
            panic!("unexpected error: {error}");
        };
        assert_eq!(id, "42");
        assert_eq!(path, "completion_day_level.3.2.star_index");
    }

    #[test]
    fn null_name_is_rejected() {
        let doc = document(json!({"42": member_json("Ada", json!({}))}))
            .replace("\"Ada\"", "null");
        assert!(matches!(
            parse_leaderboard(&doc),
            Err(ParseError::Member { .. })
        ));
    }

    #[test]
    fn missing_members_is_a_document_error() {
        let error = parse_leaderboard(r#"{"event": "2023"}"#).expect_err("no members");
        assert!(matches!(error, ParseError::Json { .. }));
    }

    #[test]
    fn malformed_json_is_a_document_error() {
        assert!(matches!(
            parse_leaderboard("{\"event\": "),
            Err(ParseError::Json { .. })
        ));
    }

    #[test]
    fn non_numeric_member_id_is_rejected() {
        let doc = document(json!({"abc": member_json("Ada", json!({}))}));
        assert!(matches!(
            parse_leaderboard(&doc),
            Err(ParseError::InvalidMemberId(id)) if id == "abc"
        ));
    }

    #[test]
    fn non_numeric_day_key_is_rejected() {
        let doc = document(json!({
            "5": member_json("Ada", json!({
                "first": {"1": {"get_star_ts": 1_701_495_000, "star_index": 1}},
            })),
        }));
        assert!(matches!(
            parse_leaderboard(&doc),
            Err(ParseError::InvalidDayKey { member_id: 5, .. })
        ));
    }

    #[test]
    fn day_keys_naming_the_same_day_are_rejected() {
        let doc = document(json!({
            "5": member_json("Ada", json!({
                "1": {"1": {"get_star_ts": 1_701_495_000, "star_index": 1}},
                "01": {"1": {"get_star_ts": 1_701_496_000, "star_index": 2}},
            })),
        }));
        let error = parse_leaderboard(&doc).expect_err("duplicate day");
        assert!(matches!(
            &error,
            ParseError::DuplicateDay { member_id: 5, day: 1, key } if key == "1"
        ));
        assert!(error.to_string().contains("member 5"));
    }

    #[test]
    fn non_numeric_event_is_rejected() {
        let doc = json!({"event": "twenty", "members": {}}).to_string();
        assert!(matches!(
            parse_leaderboard(&doc),
            Err(ParseError::InvalidEvent(_))
        ));
    }

    #[test]
    fn out_of_range_timestamp_is_rejected() {
        let doc = document(json!({
            "5": member_json("Ada", json!({
                "1": {"1": {"get_star_ts": i64::MAX, "star_index": 1}},
            })),
        }));
        assert!(matches!(
            parse_leaderboard(&doc),
            Err(ParseError::TimestampOutOfRange { field: "get_star_ts", .. })
        ));
    }

    #[test]
    fn empty_members_parse_to_empty_list() {
        let board = parse_leaderboard(&document(json!({}))).expect("parses");
        assert_eq!(board.year, 2023);
        assert!(board.members.is_empty());
    }
}
