//! Presentation-side series and chart descriptions.
//!
//! [`Series`] is the wire format between computation and rendering: a label
//! plus paired `(x, y)` points. Conversions from the core crates' series
//! types do the integer-to-float crossing in one place.

use serde::{Deserialize, Serialize};

use capviz_curves_core::CurveSeries;
use capviz_growth_core::{GrowthSeries, Trajectory};

/// A labeled sequence of `(x, y)` points to draw as one line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl From<&GrowthSeries> for Series {
    fn from(series: &GrowthSeries) -> Self {
        Series {
            label: series.label.clone(),
            points: series
                .points()
                .map(|(desired, cap)| (desired as f64, cap as f64))
                .collect(),
        }
    }
}

impl From<&CurveSeries> for Series {
    fn from(series: &CurveSeries) -> Self {
        Series {
            label: series.label.clone(),
            points: series.points().collect(),
        }
    }
}

/// Trajectories carry no label of their own; the default is "capacity",
/// overridable with [`Series::with_label`].
impl From<&Trajectory> for Series {
    fn from(trajectory: &Trajectory) -> Self {
        Series {
            label: "capacity".to_string(),
            points: trajectory
                .points()
                .map(|(len, cap)| (len as f64, cap as f64))
                .collect(),
        }
    }
}

/// Title, axis labels, and marker flag for one chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Draw a small circle at every data point, like the study figures.
    pub markers: bool,
}

impl ChartSpec {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            markers: false,
        }
    }

    pub fn with_markers(mut self, markers: bool) -> Self {
        self.markers = markers;
        self
    }
}
