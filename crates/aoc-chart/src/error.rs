//! Chart error types.

use std::path::PathBuf;

use aoc_report::ReportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A column bound by the chart spec could not be read.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Drawing or writing the image failed.
    #[error("failed to draw chart {path}")]
    Draw {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
