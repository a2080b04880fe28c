//! Window evaluation over scoped time series
//!
//! Reduces the pointlists returned by the metrics API to the single
//! number the monitor's expression describes.

pub mod evaluate;
pub mod reduce;

pub use evaluate::{evaluate_window, EvaluateError};
pub use reduce::{maximum, mean, minimum};

/// A single sample in a series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    /// Epoch milliseconds
    pub timestamp: f64,
    /// Metric value; `None` when the backend has no sample for the interval
    pub value: Option<f64>,
}

/// Pointlist for one scope, e.g. `host:web-1`
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedSeries {
    pub scope: String,
    pub points: Vec<SeriesPoint>,
}
