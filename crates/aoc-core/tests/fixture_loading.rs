//! Integration tests for loading leaderboard exports from disk.

use std::path::Path;

use aoc_core::{ParseError, load_leaderboard};
use chrono::{Datelike, Timelike};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fixture() -> &'static Path {
    Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/leaderboard.json"
    ))
}

#[test]
fn loads_fixture_in_name_order() {
    let board = load_leaderboard(fixture()).expect("fixture loads");
    assert_eq!(board.year, 2023);
    let names: Vec<&str> = board.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "grace", "Linus", "zed"]);
    assert_eq!(board.total_stars(), 8);
}

#[rstest]
#[case(0, &[1, 2])]
#[case(1, &[1, 3])]
#[case(2, &[2])]
#[case(3, &[])]
fn days_strictly_ascending(#[case] member: usize, #[case] expected: &[u32]) {
    let board = load_leaderboard(fixture()).expect("fixture loads");
    let days: Vec<u32> = board.members[member].days.iter().map(|d| d.index).collect();
    assert_eq!(days, expected);
    assert!(days.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn parts_sorted_within_day() {
    let board = load_leaderboard(fixture()).expect("fixture loads");
    let ada = &board.members[0];
    for day in &ada.days {
        let parts: Vec<u32> = day.parts.iter().map(|p| p.index).collect();
        assert_eq!(parts, vec![1, 2]);
    }
}

#[test]
fn declared_stars_match_completed_parts() {
    let board = load_leaderboard(fixture()).expect("fixture loads");
    for member in &board.members {
        assert_eq!(member.completed_parts(), member.stars as usize, "{}", member.name);
    }
}

#[test]
fn string_timestamps_are_accepted() {
    let board = load_leaderboard(fixture()).expect("fixture loads");
    let linus = &board.members[2];
    let star = linus.days[0].parts[0].get_star;
    assert_eq!((star.day(), star.hour()), (3, 2));
    assert_eq!(linus.last_star, star);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("aoc.json");
    let error = load_leaderboard(&missing).expect_err("file is missing");
    assert!(matches!(error, ParseError::Io { ref path, .. } if path == &missing));
}

#[test]
fn loading_twice_is_identical() {
    let first = load_leaderboard(fixture()).expect("fixture loads");
    let second = load_leaderboard(fixture()).expect("fixture loads");
    assert_eq!(first, second);
}
