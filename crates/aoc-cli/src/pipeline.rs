//! Chart run: load → report → tables → charts.

use std::fs;
use std::path::{Path, PathBuf};

use aoc_chart::{render_all, standard_charts};
use aoc_config::PlotConfig;
use aoc_core::load_leaderboard;
use aoc_report::{Report, build_report};
use anyhow::Context;

/// Files written by a run.
#[derive(Debug)]
pub struct RunSummary {
    pub charts: Vec<PathBuf>,
    pub tables: Option<PathBuf>,
}

/// Parse the configured leaderboard and build its report.
///
/// # Errors
///
/// Unreadable or malformed input, or a leaderboard nobody has scored on.
pub fn prepare(config: &PlotConfig) -> anyhow::Result<Report> {
    let path = &config.input.path;
    let board = load_leaderboard(path)
        .with_context(|| format!("failed to load leaderboard from {}", path.display()))?;
    tracing::debug!(
        year = board.year,
        members = board.members.len(),
        stars = board.total_stars(),
        "loaded leaderboard"
    );
    build_report(&board).context("failed to build chart tables")
}

/// Write the report (tables included) as pretty JSON.
///
/// # Errors
///
/// Serialization or file write failure.
pub fn write_tables(report: &Report, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize chart tables")?;
    fs::write(path, json).with_context(|| format!("failed to write tables to {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote chart tables");
    Ok(())
}

/// Run the whole chart pipeline for `config`.
///
/// # Errors
///
/// Any load, report, write or render failure; charts already written stay.
pub fn run(config: &PlotConfig) -> anyhow::Result<RunSummary> {
    let report = prepare(config)?;

    let out_dir = &config.output.dir;
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    if let Some(tables) = &config.output.tables {
        write_tables(&report, tables)?;
    }

    let specs = standard_charts(&report, &config.chart.title_prefix);
    let charts = render_all(&specs, &report.tables, out_dir).context("failed to render charts")?;

    Ok(RunSummary {
        charts,
        tables: config.output.tables.clone(),
    })
}
