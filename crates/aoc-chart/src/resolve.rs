//! Column lookups that turn a table plus a geometry into drawable data.
//!
//! Everything here is pure, so the data behind each chart is tested without
//! producing a bitmap.

use aoc_report::table::Column;
use aoc_report::{ReportError, Table};

use crate::spec::{Axis, BarLayer, CategoryOrder};
use crate::theme::Rgb;

/// Points of one scatter group.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

/// Group points by the `group` column in order of first appearance.
///
/// Points outside either axis' limits are dropped; a group whose points are
/// all dropped keeps its (empty) series so colors stay stable.
///
/// # Errors
///
/// Missing columns or columns of the wrong kind.
pub fn scatter_series(
    table: &Table,
    x: &str,
    y: &str,
    group: &str,
    x_axis: &Axis,
    y_axis: &Axis,
) -> Result<Vec<ScatterSeries>, ReportError> {
    let xs = table.numbers(x)?;
    let ys = table.numbers(y)?;
    let groups = table.text(group)?;

    let mut series: Vec<ScatterSeries> = Vec::new();
    for ((name, &px), &py) in groups.iter().zip(&xs).zip(&ys) {
        let index = match series.iter().position(|s| &s.name == name) {
            Some(index) => index,
            None => {
                series.push(ScatterSeries {
                    name: name.clone(),
                    points: Vec::new(),
                });
                series.len() - 1
            }
        };
        if x_axis.contains(px) && y_axis.contains(py) {
            series[index].points.push((px, py));
        }
    }
    Ok(series)
}

/// Values of one boxplot category.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGroup {
    pub label: String,
    pub values: Vec<f64>,
}

enum CategoryKey {
    Text(String),
    Number(i64),
}

impl CategoryKey {
    fn label(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
        }
    }
}

fn category_keys(table: &Table, name: &str) -> Result<Vec<CategoryKey>, ReportError> {
    match table.column(name)? {
        Column::Text(values) => Ok(values.iter().cloned().map(CategoryKey::Text).collect()),
        Column::Integer(values) => Ok(values.iter().copied().map(CategoryKey::Number).collect()),
        other @ Column::Float(_) => Err(ReportError::ColumnType {
            column: name.to_string(),
            expected: "text or integer",
            actual: other.kind(),
        }),
    }
}

/// Split `value` by `category`.
///
/// Values outside the axis limits are dropped before grouping. Categories are
/// kept even when all their values were dropped.
///
/// # Errors
///
/// Missing columns, a non-numeric value column, or a float category column.
pub fn box_groups(
    table: &Table,
    category: &str,
    value: &str,
    order: CategoryOrder,
    value_axis: &Axis,
) -> Result<Vec<BoxGroup>, ReportError> {
    let keys = category_keys(table, category)?;
    let values = table.numbers(value)?;

    let mut groups: Vec<(CategoryKey, Vec<f64>)> = Vec::new();
    for (key, &v) in keys.into_iter().zip(&values) {
        let label = key.label();
        let index = match groups.iter().position(|(k, _)| k.label() == label) {
            Some(index) => index,
            None => {
                groups.push((key, Vec::new()));
                groups.len() - 1
            }
        };
        if value_axis.contains(v) {
            groups[index].1.push(v);
        }
    }

    if order == CategoryOrder::Numeric {
        groups.sort_by_key(|(key, _)| match key {
            CategoryKey::Number(number) => (0, *number, String::new()),
            CategoryKey::Text(text) => (1, 0, text.clone()),
        });
    }

    Ok(groups
        .into_iter()
        .map(|(key, values)| BoxGroup {
            label: key.label(),
            values,
        })
        .collect())
}

/// Rectangles of one bar layer as `(left, right, height)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub label: String,
    pub color: Rgb,
    pub bars: Vec<(f64, f64, f64)>,
}

/// Place each layer's bars around the `x` positions.
///
/// Zero-height bars are omitted. The legend label is the layer's label column
/// value, falling back to the column name for an empty table.
///
/// # Errors
///
/// Missing columns or columns of the wrong kind.
pub fn bar_series(table: &Table, x: &str, layers: &[BarLayer]) -> Result<Vec<BarSeries>, ReportError> {
    let xs = table.numbers(x)?;

    layers
        .iter()
        .map(|layer| {
            let heights = table.numbers(layer.value)?;
            let label = table
                .text(layer.label)?
                .first()
                .cloned()
                .unwrap_or_else(|| layer.label.to_string());
            let half = layer.width / 2.0;
            let bars = xs
                .iter()
                .zip(&heights)
                .filter(|&(_, &height)| height > 0.0)
                .map(|(&center, &height)| {
                    let center = center + layer.nudge;
                    (center - half, center + half, height)
                })
                .collect();
            Ok(BarSeries {
                label,
                color: layer.color,
                bars,
            })
        })
        .collect()
}

/// Top of the count axis: one above the tallest bar, never below one.
#[must_use]
pub fn count_ceiling(series: &[BarSeries]) -> f64 {
    series
        .iter()
        .flat_map(|s| s.bars.iter().map(|&(_, _, height)| height))
        .fold(0.0_f64, f64::max)
        + 1.0
}
