// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, ErrorBar};
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, RGBColor};

use std::error::Error;
use std::path::Path;

use crate::constants::{
    ERROR_BAR_CAP_WIDTH_PX, LINE_WIDTH_ERROR_BAR, MARKER_RADIUS_PX, PLOT_HEIGHT, PLOT_WIDTH,
    RANGE_PADDING_FRACTION, RANGE_PADDING_MIN,
};
use crate::font_config::{FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND};
use crate::types::{AxisRange, ErrorBarPoint};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 {
        RANGE_PADDING_MIN
    } else {
        range * RANGE_PADDING_FRACTION
    };
    (min - padding, max + padding)
}

/// Tick label text: "k"/"M" notation for large magnitudes, one decimal for small
/// fractional values, integers otherwise.
pub fn format_tick_label(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 1000.0 {
        format!("{:.0}k", value / 1000.0)
    } else if value.abs() < 10.0 && value.fract() != 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.0}", value)
    }
}

/// Everything needed to draw one error-bar chart. Building it is pure; only
/// `draw_error_bar_plot` touches the file system.
#[derive(Clone, Debug)]
pub struct ErrorBarPlotConfig {
    pub title: String,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub points: Vec<ErrorBarPoint>,
    pub label: String,
    pub color: RGBColor,
    pub x_label: String,
    pub y_label: String,
}

/// Axis ranges covering every point and the full extent of its error bar.
pub fn error_bar_ranges(points: &[ErrorBarPoint]) -> Option<(AxisRange, AxisRange)> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for &(x, mean, std) in points {
        if !(x.is_finite() && mean.is_finite() && std.is_finite()) {
            continue;
        }
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(mean - std.abs());
        y_max = y_max.max(mean + std.abs());
    }

    if !x_min.is_finite() || !y_min.is_finite() {
        return None;
    }

    let (x_lo, x_hi) = calculate_range(x_min, x_max);
    let (y_lo, y_hi) = calculate_range(y_min, y_max);
    Some((x_lo..x_hi, y_lo..y_hi))
}

/// Pixel positions of one rendered error bar: its column, the mean and both bar ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarPixels {
    pub x: i32,
    pub mean_y: i32,
    pub upper_y: i32,
    pub lower_y: i32,
}

fn check_ranges(plot_config: &ErrorBarPlotConfig) -> Result<(), Box<dyn Error>> {
    if plot_config.x_range.end <= plot_config.x_range.start
        || plot_config.y_range.end <= plot_config.y_range.start
    {
        return Err(format!(
            "Invalid plot ranges for '{}': x {:?}, y {:?}",
            plot_config.title, plot_config.x_range, plot_config.y_range
        )
        .into());
    }
    Ok(())
}

/// Draws the chart onto `root_area`. The error bars go on top of the grid so
/// they keep their colour where they cross a grid line.
fn render_error_bar_chart(
    root_area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &ErrorBarPlotConfig,
) -> Result<Vec<BarPixels>, Box<dyn Error>> {
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root_area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(15)
        .y_labels(10)
        .x_label_formatter(&|x| format_tick_label(*x))
        .y_label_formatter(&|y| format_tick_label(*y))
        .bold_line_style(BLACK.mix(0.08))
        .light_line_style(BLACK.mix(0.03))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let color = plot_config.color;
    let bar_style = color.stroke_width(LINE_WIDTH_ERROR_BAR);

    chart.draw_series(plot_config.points.iter().map(|&(x, mean, std)| {
        ErrorBar::new_vertical(
            x,
            mean - std,
            mean,
            mean + std,
            bar_style,
            ERROR_BAR_CAP_WIDTH_PX,
        )
    }))?;

    let markers = chart.draw_series(
        plot_config
            .points
            .iter()
            .map(|&(x, mean, _)| Circle::new((x, mean), MARKER_RADIUS_PX, color.filled())),
    )?;

    if !plot_config.label.is_empty() {
        markers
            .label(&plot_config.label)
            .legend(move |(x, y)| Circle::new((x + 10, y), MARKER_RADIUS_PX, color.filled()));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    let bars = plot_config
        .points
        .iter()
        .map(|&(x, mean, std)| {
            let (px, mean_y) = chart.backend_coord(&(x, mean));
            BarPixels {
                x: px,
                mean_y,
                upper_y: chart.backend_coord(&(x, mean + std)).1,
                lower_y: chart.backend_coord(&(x, mean - std)).1,
            }
        })
        .collect();
    Ok(bars)
}

/// Renders an error-bar chart (circle markers, vertical bars with caps, legend,
/// grid) to a PNG file.
pub fn draw_error_bar_plot(
    output_path: &Path,
    plot_config: &ErrorBarPlotConfig,
) -> Result<(), Box<dyn Error>> {
    check_ranges(plot_config)?;

    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    let bars = render_error_bar_chart(&root_area, plot_config)?;
    log::debug!("Error bar pixel positions: {:?}", bars);

    root_area.present()?;
    log::info!("Error-bar plot saved as '{}'.", output_path.display());
    Ok(())
}

/// Renders the chart into an RGB buffer of `PLOT_WIDTH * PLOT_HEIGHT * 3` bytes.
pub fn draw_error_bar_plot_to_buffer(
    buffer: &mut [u8],
    plot_config: &ErrorBarPlotConfig,
) -> Result<Vec<BarPixels>, Box<dyn Error>> {
    check_ranges(plot_config)?;

    let expected_len = (PLOT_WIDTH * PLOT_HEIGHT * 3) as usize;
    if buffer.len() != expected_len {
        return Err(format!(
            "Plot buffer holds {} bytes, expected {expected_len}",
            buffer.len()
        )
        .into());
    }

    let root_area =
        BitMapBackend::with_buffer(buffer, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    let bars = render_error_bar_chart(&root_area, plot_config)?;
    root_area.present()?;
    Ok(bars)
}


// src/plot_framework.rs
