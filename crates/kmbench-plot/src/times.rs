//! Serial vs. parallel execution time for one input size.

use std::path::Path;

use plotters::prelude::*;

use kmbench_core::ResultsTable;

use crate::error::{render_err, PlotError};
use crate::style::{series_colour, CAPTION_FONT, FIGURE_SIZE, LABEL_FONT};

/// Render mean serial and mean parallel time vs. thread count for `points`
/// into a PNG at `path`.
///
/// A size absent from the table yields a figure with empty axes; that is the
/// expected degenerate outcome, not an error.
pub fn render_time_chart(
    table: &ResultsTable,
    points: u64,
    path: &Path,
) -> Result<(), PlotError> {
    let rows = table.rows_for_size(points);
    if rows.is_empty() {
        tracing::warn!(points, "no rows for selected size, rendering empty chart");
    }

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let max_threads = rows.iter().map(|r| r.threads).max().unwrap_or(1);
    let max_time = rows
        .iter()
        .map(|r| r.avg_serial.max(r.avg_parallel))
        .fold(0.0_f64, f64::max)
        .max(1e-6);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Execution time vs. number of threads ({points} points)"),
            CAPTION_FONT,
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..max_threads + 1, 0.0..max_time * 1.1)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Number of threads")
        .y_desc("Time (seconds)")
        .x_label_style(LABEL_FONT)
        .y_label_style(LABEL_FONT)
        .draw()
        .map_err(render_err)?;

    let serial_colour = series_colour(0);
    chart
        .draw_series(LineSeries::new(
            rows.iter().map(|r| (r.threads, r.avg_serial)),
            serial_colour.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("serial")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], serial_colour.stroke_width(2))
        });
    chart
        .draw_series(
            rows.iter()
                .map(|r| Circle::new((r.threads, r.avg_serial), 4, serial_colour.filled())),
        )
        .map_err(render_err)?;

    let parallel_colour = series_colour(1);
    chart
        .draw_series(LineSeries::new(
            rows.iter().map(|r| (r.threads, r.avg_parallel)),
            parallel_colour.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("parallel")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], parallel_colour.stroke_width(2))
        });
    chart
        .draw_series(rows.iter().map(|r| {
            Cross::new((r.threads, r.avg_parallel), 4, parallel_colour.stroke_width(2))
        }))
        .map_err(render_err)?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8).filled())
        .border_style(BLACK.stroke_width(1))
        .draw()
        .map_err(render_err)?;
    root.present().map_err(render_err)?;

    tracing::debug!(path = %path.display(), points, rows = rows.len(), "time chart rendered");
    Ok(())
}
