//! Chart specifications as data.
//!
//! The four leaderboard charts differ only in the values built here; the
//! renderer has one code path per geometry kind, not per chart.

use aoc_report::table::columns;
use aoc_report::{Report, ReportTables, Table};
use chrono::{DateTime, FixedOffset, Timelike};

use crate::theme::{DARK_GREEN, ORANGE, Rgb, Theme};

/// Pixel size of every chart.
pub const CHART_SIZE: (u32, u32) = (1000, 1000);

/// Upper end of the hour axis.
const HOURS_PER_DAY: f64 = 24.0;

/// Hour axis break positions and their labels; the plotted day starts at 06:00.
const HOUR_BREAKS: [(f64, &str); 5] = [
    (0.0, "6"),
    (6.0, "12"),
    (12.0, "18"),
    (18.0, "24"),
    (24.0, "6"),
];

/// Which report table a chart is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource {
    Stars,
    StarsReversed,
    DailyCounts,
}

impl TableSource {
    #[must_use]
    pub const fn select(self, tables: &ReportTables) -> &Table {
        match self {
            Self::Stars => &tables.stars,
            Self::StarsReversed => &tables.stars_reversed,
            Self::DailyCounts => &tables.daily_counts,
        }
    }
}

/// A labelled tick on an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Break {
    pub at: f64,
    pub label: String,
}

/// A continuous axis with fixed limits and explicit breaks.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub name: String,
    pub limits: (f64, f64),
    pub breaks: Vec<Break>,
}

impl Axis {
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.limits.0..=self.limits.1).contains(&value)
    }

    #[must_use]
    pub fn break_points(&self) -> Vec<f64> {
        self.breaks.iter().map(|b| b.at).collect()
    }

    /// Label of the break at `value`, or the value itself when it is not a break.
    #[must_use]
    pub fn label_for(&self, value: f64) -> String {
        self.breaks
            .iter()
            .find(|b| (b.at - value).abs() < 1e-6)
            .map_or_else(|| format!("{value:.0}"), |b| b.label.clone())
    }
}

/// Order of categories on a discrete axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryOrder {
    /// First appearance in the table.
    Appearance,
    /// Ascending numeric value of the category.
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Hidden,
    Right,
    Top,
}

/// One bar series of a grouped bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayer {
    /// Column holding bar heights.
    pub value: &'static str,
    /// Column holding the constant legend label.
    pub label: &'static str,
    /// Horizontal shift from the category center.
    pub nudge: f64,
    pub width: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Points at (`x`, `y`), colored and shaped per `group` value.
    Scatter {
        x: &'static str,
        y: &'static str,
        group: &'static str,
        x_axis: Axis,
        y_axis: Axis,
    },
    /// Horizontal boxplots of `value`, one per `category` value.
    Boxplot {
        category: &'static str,
        value: &'static str,
        order: CategoryOrder,
        category_name: String,
        value_axis: Axis,
    },
    /// Bars at each `x`, one per layer, side by side.
    GroupedBars {
        x: &'static str,
        layers: Vec<BarLayer>,
        x_axis: Axis,
        y_name: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub file_name: &'static str,
    pub title: String,
    pub theme: Theme,
    pub legend: LegendPosition,
    pub source: TableSource,
    pub geometry: Geometry,
}

/// Chart title: `"{prefix} {year} (Stand {as_of})"`.
#[must_use]
pub fn chart_title(prefix: &str, report: &Report) -> String {
    format!("{prefix} {} (Stand {})", report.year, stand_timestamp(&report.as_of))
}

/// ISO-8601 local time with offset; seconds appear only when non-zero.
fn stand_timestamp(as_of: &DateTime<FixedOffset>) -> String {
    let format = if as_of.second() == 0 {
        "%Y-%m-%dT%H:%M%:z"
    } else {
        "%Y-%m-%dT%H:%M:%S%:z"
    };
    as_of.format(format).to_string()
}

fn hour_axis() -> Axis {
    Axis {
        name: "Hour".to_string(),
        limits: (0.0, HOURS_PER_DAY),
        breaks: HOUR_BREAKS
            .iter()
            .map(|&(at, label)| Break {
                at,
                label: label.to_string(),
            })
            .collect(),
    }
}

/// Vertical axis of the scatter: one band per completed-day slot, labelled
/// from 1, with the break nudged into the band the jitter spreads over.
fn day_slot_axis(day_span: usize) -> Axis {
    #[allow(clippy::cast_precision_loss)]
    let span = day_span as f64;
    Axis {
        name: "Day".to_string(),
        limits: (-0.5, span + 0.5),
        breaks: (0..=day_span)
            .map(|slot| {
                #[allow(clippy::cast_precision_loss)]
                let at = slot as f64 + 0.25;
                Break {
                    at,
                    label: (slot + 1).to_string(),
                }
            })
            .collect(),
    }
}

fn event_day_axis() -> Axis {
    Axis {
        name: "Day".to_string(),
        limits: (0.5, 25.5),
        breaks: (1..=25)
            .map(|day| Break {
                at: f64::from(day),
                label: day.to_string(),
            })
            .collect(),
    }
}

/// The four leaderboard charts: `plot.png` .. `plot4.png`.
#[must_use]
pub fn standard_charts(report: &Report, title_prefix: &str) -> Vec<ChartSpec> {
    let title = chart_title(title_prefix, report);

    vec![
        ChartSpec {
            file_name: "plot.png",
            title: title.clone(),
            theme: Theme::Darcula,
            legend: LegendPosition::Right,
            source: TableSource::Stars,
            geometry: Geometry::Scatter {
                x: columns::HOURS_TO_COMPLETE,
                y: columns::Y,
                group: columns::NAME,
                x_axis: hour_axis(),
                y_axis: day_slot_axis(report.day_span),
            },
        },
        ChartSpec {
            file_name: "plot2.png",
            title: title.clone(),
            theme: Theme::SolarizedLight,
            legend: LegendPosition::Hidden,
            source: TableSource::StarsReversed,
            geometry: Geometry::Boxplot {
                category: columns::NAME,
                value: columns::COMPLETED_AT_HOUR_OF_DAY,
                order: CategoryOrder::Appearance,
                category_name: "Name".to_string(),
                value_axis: hour_axis(),
            },
        },
        ChartSpec {
            file_name: "plot3.png",
            title: title.clone(),
            theme: Theme::SolarizedLight,
            legend: LegendPosition::Hidden,
            source: TableSource::StarsReversed,
            geometry: Geometry::Boxplot {
                category: columns::DAY,
                value: columns::COMPLETED_AT_HOUR_OF_DAY,
                order: CategoryOrder::Numeric,
                category_name: "Day".to_string(),
                value_axis: hour_axis(),
            },
        },
        ChartSpec {
            file_name: "plot4.png",
            title,
            theme: Theme::SolarizedLight,
            legend: LegendPosition::Top,
            source: TableSource::DailyCounts,
            geometry: Geometry::GroupedBars {
                x: columns::DAY,
                layers: vec![
                    BarLayer {
                        value: columns::PART1,
                        label: columns::PART1_LABEL,
                        nudge: -0.2,
                        width: 0.4,
                        color: DARK_GREEN,
                    },
                    BarLayer {
                        value: columns::PART2,
                        label: columns::PART2_LABEL,
                        nudge: 0.2,
                        width: 0.4,
                        color: ORANGE,
                    },
                ],
                x_axis: event_day_axis(),
                y_name: "Stars".to_string(),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, "6")]
    #[case(6.0, "12")]
    #[case(12.0, "18")]
    #[case(18.0, "24")]
    #[case(24.0, "6")]
    fn hour_axis_labels_clock_time(#[case] at: f64, #[case] label: &str) {
        assert_eq!(hour_axis().label_for(at), label);
    }

    #[test]
    fn hour_axis_keeps_only_one_day() {
        let axis = hour_axis();
        assert_eq!(axis.limits, (0.0, 24.0));
        assert!(axis.contains(0.0));
        assert!(axis.contains(24.0));
        assert!(!axis.contains(24.5));
        assert!(!axis.contains(-0.1));
    }

    #[test]
    fn day_slot_axis_labels_from_one() {
        let axis = day_slot_axis(3);
        assert_eq!(axis.limits, (-0.5, 3.5));
        assert_eq!(axis.break_points(), vec![0.25, 1.25, 2.25, 3.25]);
        let labels: Vec<String> = axis.breaks.iter().map(|b| b.label.clone()).collect();
        assert_eq!(labels, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn event_day_axis_covers_the_event() {
        let axis = event_day_axis();
        assert_eq!(axis.breaks.len(), 25);
        assert_eq!(axis.label_for(25.0), "25");
        assert!(axis.contains(0.6));
    }

    #[rstest]
    #[case("2023-12-03T05:00:00+01:00", "2023-12-03T05:00+01:00")]
    #[case("2023-12-10T07:00:05+01:00", "2023-12-10T07:00:05+01:00")]
    #[case("2023-12-01T06:30:00+01:00", "2023-12-01T06:30+01:00")]
    fn stand_timestamp_drops_zero_seconds(#[case] instant: &str, #[case] expected: &str) {
        let as_of = DateTime::parse_from_rfc3339(instant).expect("valid instant");
        assert_eq!(stand_timestamp(&as_of), expected);
    }

    #[test]
    fn unlabelled_values_print_as_numbers() {
        assert_eq!(hour_axis().label_for(3.0), "3");
    }
}
