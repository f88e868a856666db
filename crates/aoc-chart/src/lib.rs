//! # aoc-chart
//!
//! Declarative leaderboard charts rendered with plotters.
//!
//! Each chart is a [`ChartSpec`] value (geometry, axes, column bindings,
//! theme, output file name). A single [`render`] function resolves the bound
//! columns from the report tables and draws any spec to a PNG file.

mod backend;
mod coord;
mod error;
pub mod render;
pub mod resolve;
pub mod spec;
pub mod theme;

pub use error::ChartError;
pub use render::{render, render_all};
pub use spec::{Axis, ChartSpec, Geometry, LegendPosition, TableSource, standard_charts};
pub use theme::{Rgb, Theme};
