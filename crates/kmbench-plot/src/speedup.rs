//! Speed-up vs. thread count, one curve per input size.

use std::path::Path;

use plotters::prelude::*;

use kmbench_core::ResultsTable;

use crate::error::{render_err, PlotError};
use crate::style::{series_colour, CAPTION_FONT, FIGURE_SIZE, LABEL_FONT};

/// Render one line of speed-up vs. thread count per distinct input size,
/// ascending, into a PNG at `path`.
pub fn render_speedup_chart(table: &ResultsTable, path: &Path) -> Result<(), PlotError> {
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let max_threads = table.rows().iter().map(|r| r.threads).max().unwrap_or(1);
    let max_speedup = table
        .rows()
        .iter()
        .map(|r| r.speedup)
        .fold(1.0_f64, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Speed-up vs. number of threads", CAPTION_FONT)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..max_threads + 1, 0.0..max_speedup * 1.1)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Number of threads")
        .y_desc("Speed-up (serial / parallel)")
        .x_label_style(LABEL_FONT)
        .y_label_style(LABEL_FONT)
        .draw()
        .map_err(render_err)?;

    for (index, points) in table.sizes().into_iter().enumerate() {
        let rows = table.rows_for_size(points);
        let colour = series_colour(index);

        chart
            .draw_series(LineSeries::new(
                rows.iter().map(|r| (r.threads, r.speedup)),
                colour.stroke_width(2),
            ))
            .map_err(render_err)?
            .label(format!("{points} points"))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], colour.stroke_width(2))
            });

        chart
            .draw_series(
                rows.iter()
                    .map(|r| Circle::new((r.threads, r.speedup), 4, colour.filled())),
            )
            .map_err(render_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8).filled())
        .border_style(BLACK.stroke_width(1))
        .draw()
        .map_err(render_err)?;
    root.present().map_err(render_err)?;

    tracing::debug!(path = %path.display(), series = table.sizes().len(), "speed-up chart rendered");
    Ok(())
}
