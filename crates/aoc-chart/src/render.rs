//! Draw [`ChartSpec`]s to PNG files.

use std::error::Error;
use std::path::{Path, PathBuf};

use aoc_report::ReportTables;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::backend::FontSafeBackend;
use crate::coord::BreakCoord;
use crate::error::ChartError;
use crate::resolve::{BarSeries, BoxGroup, ScatterSeries, bar_series, box_groups, count_ceiling, scatter_series};
use crate::spec::{Axis, CHART_SIZE, ChartSpec, Geometry, LegendPosition};
use crate::theme::ThemeColors;

type DrawResult = Result<(), Box<dyn Error + Send + Sync>>;

const FONT: &str = "sans-serif";
const TITLE_SIZE: u32 = 26;
const AXIS_NAME_SIZE: u32 = 20;
const LABEL_SIZE: u32 = 16;

/// Data resolved from the bound table, with the axes it is drawn against.
enum Resolved<'a> {
    Scatter {
        series: Vec<ScatterSeries>,
        x_axis: &'a Axis,
        y_axis: &'a Axis,
    },
    Boxes {
        groups: Vec<BoxGroup>,
        value_axis: &'a Axis,
        category_name: &'a str,
    },
    Bars {
        series: Vec<BarSeries>,
        x_axis: &'a Axis,
        y_name: &'a str,
    },
}

fn resolve<'a>(spec: &'a ChartSpec, tables: &ReportTables) -> Result<Resolved<'a>, ChartError> {
    let table = spec.source.select(tables);
    let resolved = match &spec.geometry {
        Geometry::Scatter {
            x,
            y,
            group,
            x_axis,
            y_axis,
        } => Resolved::Scatter {
            series: scatter_series(table, x, y, group, x_axis, y_axis)?,
            x_axis,
            y_axis,
        },
        Geometry::Boxplot {
            category,
            value,
            order,
            category_name,
            value_axis,
        } => Resolved::Boxes {
            groups: box_groups(table, category, value, *order, value_axis)?,
            value_axis,
            category_name,
        },
        Geometry::GroupedBars {
            x,
            layers,
            x_axis,
            y_name,
        } => Resolved::Bars {
            series: bar_series(table, x, layers)?,
            x_axis,
            y_name,
        },
    };
    Ok(resolved)
}

/// Render one chart into `out_dir`, returning the written file.
///
/// Columns are resolved before the bitmap is created, so a binding error
/// leaves no file behind.
///
/// # Errors
///
/// [`ChartError::Report`] when a bound column is missing or mistyped,
/// [`ChartError::Draw`] when plotting or writing the PNG fails.
pub fn render(spec: &ChartSpec, tables: &ReportTables, out_dir: &Path) -> Result<PathBuf, ChartError> {
    let resolved = resolve(spec, tables)?;
    let path = out_dir.join(spec.file_name);

    let root = FontSafeBackend::new(BitMapBackend::new(&path, CHART_SIZE)).into_drawing_area();
    let drawn = match &resolved {
        Resolved::Scatter {
            series,
            x_axis,
            y_axis,
        } => draw_scatter(&root, spec, series, x_axis, y_axis),
        Resolved::Boxes {
            groups,
            value_axis,
            category_name,
        } => draw_boxplot(&root, spec, groups, value_axis, category_name),
        Resolved::Bars {
            series,
            x_axis,
            y_name,
        } => draw_bars(&root, spec, series, x_axis, y_name),
    };
    drawn
        .and_then(|()| root.present().map_err(Into::into))
        .map_err(|source| ChartError::Draw {
            path: path.clone(),
            source,
        })?;
    drop(root);

    tracing::info!(path = %path.display(), "wrote chart");
    Ok(path)
}

/// Render every chart in order, stopping at the first failure.
///
/// # Errors
///
/// The first [`ChartError`] encountered.
pub fn render_all(
    specs: &[ChartSpec],
    tables: &ReportTables,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ChartError> {
    specs
        .iter()
        .map(|spec| render(spec, tables, out_dir))
        .collect()
}

fn text_style(size: u32, colors: &ThemeColors) -> TextStyle<'static> {
    (FONT, size).into_font().color(&colors.foreground.to_plotters())
}

fn draw_scatter<DB>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    series: &[ScatterSeries],
    x_axis: &Axis,
    y_axis: &Axis,
) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let colors = spec.theme.colors();
    root.fill(&colors.background.to_plotters())?;

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, text_style(TITLE_SIZE, &colors))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(BreakCoord::from_axis(x_axis), BreakCoord::from_axis(y_axis))?;

    let x_label = |v: &f64| x_axis.label_for(*v);
    let y_label = |v: &f64| y_axis.label_for(*v);
    chart
        .configure_mesh()
        .x_desc(x_axis.name.as_str())
        .y_desc(y_axis.name.as_str())
        .x_label_formatter(&x_label)
        .y_label_formatter(&y_label)
        .axis_desc_style(text_style(AXIS_NAME_SIZE, &colors))
        .label_style(text_style(LABEL_SIZE, &colors))
        .axis_style(colors.foreground.to_plotters())
        .bold_line_style(colors.grid.to_plotters())
        .draw()?;

    for (i, group) in series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let points = group.points.iter().copied();
        // Shapes cycle so groups stay apart when colors repeat.
        match i % 3 {
            0 => chart
                .draw_series(points.map(|p| Circle::new(p, 5, color.filled())))?
                .label(group.name.as_str())
                .legend(move |(x, y)| Circle::new((x, y), 5, color.filled())),
            1 => chart
                .draw_series(points.map(|p| TriangleMarker::new(p, 6, color.filled())))?
                .label(group.name.as_str())
                .legend(move |(x, y)| TriangleMarker::new((x, y), 6, color.filled())),
            _ => chart
                .draw_series(points.map(|p| Cross::new(p, 5, color.stroke_width(2))))?
                .label(group.name.as_str())
                .legend(move |(x, y)| Cross::new((x, y), 5, color.stroke_width(2))),
        };
    }

    if spec.legend != LegendPosition::Hidden {
        chart
            .configure_series_labels()
            .position(legend_position(spec.legend))
            .background_style(colors.background.to_plotters().mix(0.85))
            .border_style(colors.foreground.to_plotters())
            .label_font(text_style(LABEL_SIZE, &colors))
            .draw()?;
    }
    Ok(())
}

fn draw_boxplot<DB>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    groups: &[BoxGroup],
    value_axis: &Axis,
    category_name: &str,
) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let colors = spec.theme.colors();
    root.fill(&colors.background.to_plotters())?;

    let labels: Vec<String> = groups.iter().map(|g| g.label.clone()).collect();

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, text_style(TITLE_SIZE, &colors))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(120)
        .build_cartesian_2d(BreakCoord::from_axis_f32(value_axis), labels[..].into_segmented())?;

    let x_label = |v: &f32| value_axis.label_for(f64::from(*v));
    let y_label = |v: &SegmentValue<&String>| match v {
        SegmentValue::CenterOf(label) | SegmentValue::Exact(label) => (*label).clone(),
        SegmentValue::Last => String::new(),
    };
    chart
        .configure_mesh()
        .x_desc(value_axis.name.as_str())
        .y_desc(category_name)
        .x_label_formatter(&x_label)
        .y_label_formatter(&y_label)
        .axis_desc_style(text_style(AXIS_NAME_SIZE, &colors))
        .label_style(text_style(LABEL_SIZE, &colors))
        .axis_style(colors.foreground.to_plotters())
        .bold_line_style(colors.grid.to_plotters())
        .draw()?;

    let box_width = u32::try_from(CHART_SIZE.1 as usize * 2 / 3 / groups.len().max(1))
        .unwrap_or(u32::MAX)
        .clamp(4, 40);
    let stroke = colors.foreground.to_plotters();
    chart.draw_series(
        groups
            .iter()
            .zip(&labels)
            .filter(|(group, _)| !group.values.is_empty())
            .map(|(group, label)| {
                Boxplot::new_horizontal(SegmentValue::CenterOf(label), &Quartiles::new(&group.values))
                    .width(box_width)
                    .whisker_width(0.5)
                    .style(stroke)
            }),
    )?;
    Ok(())
}

fn draw_bars<DB>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    series: &[BarSeries],
    x_axis: &Axis,
    y_name: &str,
) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let colors = spec.theme.colors();
    root.fill(&colors.background.to_plotters())?;

    let ceiling = count_ceiling(series);
    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, text_style(TITLE_SIZE, &colors))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(BreakCoord::from_axis(x_axis), 0.0..ceiling)?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let y_ticks = (ceiling as usize + 1).min(11);
    let x_label = |v: &f64| x_axis.label_for(*v);
    chart
        .configure_mesh()
        .x_desc(x_axis.name.as_str())
        .y_desc(y_name)
        .x_label_formatter(&x_label)
        .y_labels(y_ticks)
        .y_label_formatter(&|v| format!("{v:.0}"))
        .axis_desc_style(text_style(AXIS_NAME_SIZE, &colors))
        .label_style(text_style(LABEL_SIZE, &colors))
        .axis_style(colors.foreground.to_plotters())
        .bold_line_style(colors.grid.to_plotters())
        .light_line_style(TRANSPARENT)
        .draw()?;

    for layer in series {
        let color = layer.color.to_plotters();
        chart
            .draw_series(
                layer
                    .bars
                    .iter()
                    .map(|&(left, right, height)| Rectangle::new([(left, 0.0), (right, height)], color.filled())),
            )?
            .label(layer.label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.filled()));
    }

    if spec.legend != LegendPosition::Hidden {
        chart
            .configure_series_labels()
            .position(legend_position(spec.legend))
            .background_style(colors.background.to_plotters().mix(0.85))
            .border_style(colors.foreground.to_plotters())
            .label_font(text_style(LABEL_SIZE, &colors))
            .draw()?;
    }
    Ok(())
}

const fn legend_position(legend: LegendPosition) -> SeriesLabelPosition {
    match legend {
        LegendPosition::Top => SeriesLabelPosition::UpperMiddle,
        LegendPosition::Right | LegendPosition::Hidden => SeriesLabelPosition::UpperRight,
    }
}
