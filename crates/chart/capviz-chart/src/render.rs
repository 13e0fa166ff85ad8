//! Line-chart rendering on top of plotters.
//!
//! `draw_*` functions target any drawing area (tests drive them through the
//! in-memory SVG backend); `save_*` wrap them with a PNG file backend.

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::ChartError;
use crate::series::{ChartSpec, Series};

const PALETTE: [RGBColor; 6] = [BLUE, RED, GREEN, MAGENTA, CYAN, BLACK];

fn draw_err<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Draw(err.to_string())
}

fn pad_range(min: f64, max: f64) -> Range<f64> {
    let mut pad = (max - min) * 0.05;
    if pad == 0.0 {
        pad = 1.0;
    }
    (min - pad)..(max + pad)
}

/// Axis ranges covering every finite point across all series, padded a
/// little on each side so lines do not sit on the frame.
fn data_bounds(series: &[Series]) -> Result<(Range<f64>, Range<f64>), ChartError> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let mut seen = false;
    for s in series {
        for &(x, y) in &s.points {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            seen = true;
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !seen {
        return Err(ChartError::EmptyChart);
    }
    Ok((pad_range(x_min, x_max), pad_range(y_min, y_max)))
}

/// Draw a labeled line chart into `area`: caption, mesh grid, axis
/// descriptions, one colored line per series, and a legend box.
pub fn draw_line_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    series: &[Series],
) -> Result<(), ChartError> {
    let (x_range, y_range) = data_bounds(series)?;

    let mut chart = ChartBuilder::on(area)
        .caption(&spec.title, ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .draw()
        .map_err(draw_err)?;

    for (idx, s) in series.iter().enumerate() {
        if s.points.len() < 2 {
            log::warn!(
                "series '{}' has {} point(s); it will not draw a visible line",
                s.label,
                s.points.len()
            );
        }
        let color = PALETTE[idx % PALETTE.len()];
        chart
            .draw_series(LineSeries::new(s.points.iter().copied(), &color))
            .map_err(draw_err)?
            .label(s.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        if spec.markers {
            chart
                .draw_series(s.points.iter().map(|&p| Circle::new(p, 2, color.filled())))
                .map_err(draw_err)?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)?;

    Ok(())
}

/// Draw several charts stacked vertically into `area`, one panel per entry.
pub fn draw_panel_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panels: &[(ChartSpec, Vec<Series>)],
) -> Result<(), ChartError> {
    if panels.is_empty() {
        return Err(ChartError::EmptyChart);
    }
    let rows = area.split_evenly((panels.len(), 1));
    for ((spec, series), row) in panels.iter().zip(rows.iter()) {
        draw_line_chart(row, spec, series)?;
    }
    Ok(())
}

/// Render a single chart to a PNG file. The parent directory must already
/// exist.
pub fn save_line_chart(
    path: &Path,
    size: (u32, u32),
    spec: &ChartSpec,
    series: &[Series],
) -> Result<(), ChartError> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    draw_line_chart(&root, spec, series)?;
    root.present().map_err(draw_err)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Render vertically stacked panels to a PNG file.
pub fn save_panel_chart(
    path: &Path,
    size: (u32, u32),
    panels: &[(ChartSpec, Vec<Series>)],
) -> Result<(), ChartError> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    draw_panel_chart(&root, panels)?;
    root.present().map_err(draw_err)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
