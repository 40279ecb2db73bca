//! # kmbench-plot
//!
//! Renders the results table as PNG figures: speed-up curves across all
//! input sizes, and the serial/parallel time comparison for a single size.

pub mod error;
pub mod speedup;
mod style;
pub mod times;

pub use error::PlotError;
pub use speedup::render_speedup_chart;
pub use times::render_time_chart;
