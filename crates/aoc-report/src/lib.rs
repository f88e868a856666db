//! # aoc-report
//!
//! Completion metrics and chart tables for aocplot.
//!
//! Turns a parsed [`aoc_core::Leaderboard`] into the column-oriented tables
//! the charts are drawn from:
//! - [`metrics`]: fractional completion hours, dense per-day star counts,
//!   day span and the "as of" timestamp
//! - [`table`]: named, equal-length columns and the two table builders
//! - [`report`]: everything a chart run needs, built in one pass

mod error;
pub mod metrics;
pub mod report;
pub mod table;

pub use error::ReportError;
pub use metrics::DailyStarCount;
pub use report::{Report, ReportTables, build_report};
pub use table::{Column, Table};
