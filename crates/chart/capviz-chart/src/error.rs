//! Error types for the chart adapter.

use thiserror::Error;

/// Errors produced while rendering charts.
#[derive(Debug, Error)]
pub enum ChartError {
    /// No series were given, or none of them contains a finite point.
    #[error("nothing to chart: no finite data points")]
    EmptyChart,
    /// Backend or draw failure, stringified from the underlying plotters
    /// error.
    #[error("chart draw error: {0}")]
    Draw(String),
}
