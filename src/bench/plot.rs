//! Hit Rate Plot
//!
//! Draws hit rate against capacity for a sweep, one line per workload, with
//! capacity on a log scale.

use std::path::Path;

use plotters::prelude::*;

use crate::bench::BenchReport;
use crate::error::{CacheError, Result};

/// File name the sweep writes the chart to.
pub const PLOT_FILE_NAME: &str = "lru_bench_hitrate.svg";

const CHART_SIZE: (u32, u32) = (800, 500);

fn plot_err<E: std::fmt::Display>(e: E) -> CacheError {
    CacheError::Plot(e.to_string())
}

/// Groups `(capacity, hit_rate)` points by workload in order of first
/// appearance, each series sorted by capacity.
fn series_by_workload(reports: &[BenchReport]) -> Vec<(&str, Vec<(f64, f64)>)> {
    let mut series: Vec<(&str, Vec<(f64, f64)>)> = Vec::new();
    for report in reports {
        let point = (report.capacity as f64, report.hit_rate);
        match series.iter_mut().find(|(name, _)| *name == report.workload) {
            Some((_, points)) => points.push(point),
            None => series.push((report.workload.as_str(), vec![point])),
        }
    }
    for (_, points) in &mut series {
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
    }
    series
}

// == Plot Hit Rate ==
/// Writes an SVG chart of hit rate vs capacity to `path`.
///
/// # Errors
/// Returns `CacheError::InvalidRequest` when `reports` is empty and
/// `CacheError::Plot` if drawing or writing the chart fails.
pub fn plot_hit_rate(path: &Path, reports: &[BenchReport]) -> Result<()> {
    if reports.is_empty() {
        return Err(CacheError::InvalidRequest("no reports to plot".to_string()));
    }

    let series = series_by_workload(reports);
    let (x_min, x_max) = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|p| p.0))
        .fold((f64::MAX, f64::MIN), |(lo, hi), x| (lo.min(x), hi.max(x)));

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    // Pad the x range so a single capacity still spans a visible interval.
    let mut chart = ChartBuilder::on(&root)
        .caption("LRU hit rate vs capacity", ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((x_min / 1.5..x_max * 1.5).log_scale(), 0.0f64..1.0f64)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("capacity (entries)")
        .y_desc("hit rate")
        .draw()
        .map_err(plot_err)?;

    for (idx, (name, points)) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let style = color.stroke_width(2);

        chart
            .draw_series(LineSeries::new(points.iter().copied(), style))
            .map_err(plot_err)?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, 3, color.filled())),
            )
            .map_err(plot_err)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}
