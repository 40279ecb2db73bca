//! Chart error type.

use thiserror::Error;

/// Errors produced while rendering a chart.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The drawing backend failed.
    #[error("chart rendering failed: {0}")]
    Render(String),
}

/// Collapse a backend error into [`PlotError::Render`].
pub(crate) fn render_err<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}
