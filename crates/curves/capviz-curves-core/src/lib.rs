//! capviz Curves Core (renderer-agnostic)
//!
//! Scalar mathematical curves sampled over linearly spaced domains. The
//! original study charted exponential decay next to the growth figures; the
//! sampling API keeps the function pluggable so other curves chart the same
//! way.

use serde::{Deserialize, Serialize};

/// A sampled scalar curve: two equal-length ordered sequences.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveSeries {
    pub label: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl CurveSeries {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// `count` evenly spaced samples over `[start, end]` with both endpoints
/// included. `count == 0` yields an empty vector and `count == 1` yields
/// `[start]`. The final sample is pinned to `end` so accumulated rounding
/// never shifts the right edge of the domain.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut xs: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            xs[count - 1] = end;
            xs
        }
    }
}

/// Sample `f` at `count` evenly spaced points over `[start, end]`.
pub fn sample<F: Fn(f64) -> f64>(
    label: &str,
    f: F,
    start: f64,
    end: f64,
    count: usize,
) -> CurveSeries {
    let xs = linspace(start, end, count);
    let ys = xs.iter().map(|&x| f(x)).collect();
    CurveSeries {
        label: label.to_string(),
        xs,
        ys,
    }
}

/// The exponential decay curve `e^(-x)`; the original study plotted it over
/// `[0, 10]` with 100 samples.
pub fn exp_decay(start: f64, end: f64, count: usize) -> CurveSeries {
    sample("e^-x", |x| (-x).exp(), start, end, count)
}
