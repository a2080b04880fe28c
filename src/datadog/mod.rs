//! Datadog v1 API client and wire models
//!
//! Two endpoints are used: monitor details (query expression, thresholds,
//! overall state) and the metric query API the monitor's series query is
//! replayed against. Both authenticate with the `DD-API-KEY` and
//! `DD-APPLICATION-KEY` headers.

pub mod client;
pub mod model;

pub use client::{ApiError, DatadogClient};
pub use model::{MetricQuery, Monitor, MonitorOptions, Series, Thresholds};
