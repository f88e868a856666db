//! # aoc-core
//!
//! Leaderboard data model and export parsing for aocplot.
//!
//! This crate provides the foundational types shared across all aocplot crates:
//! - Entity structs for members, days and parts
//! - The schema-validating parser for leaderboard exports
//! - Calendar constants and epoch conversion helpers
//! - Parse error types

pub mod calendar;
pub mod entities;
pub mod errors;
pub mod parse;
mod wire;

pub use entities::{Day, Leaderboard, Member, Part};
pub use errors::ParseError;
pub use parse::{load_leaderboard, parse_leaderboard};
