//! capviz Chart (plotters adapter)
//!
//! The charting collaborator: consumes series of paired numeric sequences
//! and renders labeled line charts with a title, axis labels, mesh grid, and
//! legend. Renders to PNG files for the driver programs and into SVG strings
//! for tests. Core crates stay renderer-agnostic; conversions from their
//! series types live here.

pub mod error;
pub mod render;
pub mod series;

// Re-exports for consumers (drivers)
pub use error::ChartError;
pub use render::{draw_line_chart, draw_panel_chart, save_line_chart, save_panel_chart};
pub use series::{ChartSpec, Series};
