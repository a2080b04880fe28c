//! Wire models for the Datadog v1 API

use serde::Deserialize;

use crate::series::{ScopedSeries, SeriesPoint};

/// Monitor details from `GET /api/v1/monitor/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct Monitor {
    pub id: u64,
    /// The monitor's query expression, e.g. `avg(last_5m):avg:system.cpu.user{*} > 80`
    pub query: String,
    #[serde(default)]
    pub overall_state: Option<String>,
    #[serde(default)]
    pub options: MonitorOptions,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonitorOptions {
    #[serde(default)]
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thresholds {
    pub critical: Option<f64>,
}

impl Monitor {
    /// Whether the monitor is currently in the `Alert` state
    ///
    /// Warn, No Data, and OK all read as not alerting.
    pub fn is_alerting(&self) -> bool {
        self.overall_state.as_deref() == Some("Alert")
    }
}

/// Response body for `GET /api/v1/query`
#[derive(Debug, Clone, Deserialize)]
pub struct MetricQuery {
    #[serde(default)]
    pub series: Vec<Series>,
}

/// One scoped pointlist in a metric query response
#[derive(Debug, Clone, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub scope: String,
    /// `[timestamp_ms, value]` pairs; the value is null for empty intervals
    #[serde(default)]
    pub pointlist: Vec<(f64, Option<f64>)>,
}

impl From<Series> for ScopedSeries {
    fn from(series: Series) -> Self {
        ScopedSeries {
            scope: series.scope,
            points: series
                .pointlist
                .into_iter()
                .map(|(timestamp, value)| SeriesPoint { timestamp, value })
                .collect(),
        }
    }
}

/// Error payload Datadog attaches to non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_monitor() {
        let body = serde_json::json!({
            "id": 4271234,
            "name": "CPU high on web tier",
            "query": "avg(last_5m):avg:system.cpu.user{*} > 80",
            "overall_state": "OK",
            "options": {
                "thresholds": { "critical": 80.0, "warning": 60.0 }
            }
        });

        let monitor: Monitor = serde_json::from_value(body).unwrap();
        assert_eq!(monitor.id, 4271234);
        assert_eq!(monitor.query, "avg(last_5m):avg:system.cpu.user{*} > 80");
        assert_eq!(monitor.options.thresholds.critical, Some(80.0));
        assert!(!monitor.is_alerting());
    }

    #[test]
    fn test_decode_monitor_without_options() {
        let body = serde_json::json!({
            "id": 1,
            "query": "avg(last_5m):avg:system.cpu.user{*} > 80"
        });

        let monitor: Monitor = serde_json::from_value(body).unwrap();
        assert_eq!(monitor.options.thresholds.critical, None);
        assert!(!monitor.is_alerting());
    }

    #[test]
    fn test_alert_state() {
        let body = serde_json::json!({
            "id": 1,
            "query": "avg(last_5m):avg:system.cpu.user{*} > 80",
            "overall_state": "Alert"
        });

        let monitor: Monitor = serde_json::from_value(body).unwrap();
        assert!(monitor.is_alerting());
    }

    #[test]
    fn test_warn_state_is_not_alerting() {
        let body = serde_json::json!({
            "id": 1,
            "query": "avg(last_5m):avg:system.cpu.user{*} > 80",
            "overall_state": "Warn"
        });

        let monitor: Monitor = serde_json::from_value(body).unwrap();
        assert!(!monitor.is_alerting());
    }

    #[test]
    fn test_decode_metric_query() {
        let body = serde_json::json!({
            "status": "ok",
            "series": [
                {
                    "scope": "host:web-1",
                    "pointlist": [[1_700_000_000_000.0, 0.35], [1_700_000_060_000.0, null]]
                }
            ]
        });

        let response: MetricQuery = serde_json::from_value(body).unwrap();
        assert_eq!(response.series.len(), 1);

        let series: ScopedSeries = response.series[0].clone().into();
        assert_eq!(series.scope, "host:web-1");
        assert_eq!(series.points[0].value, Some(0.35));
        assert_eq!(series.points[1].value, None);
    }

    #[test]
    fn test_decode_empty_metric_query() {
        let response: MetricQuery =
            serde_json::from_value(serde_json::json!({ "status": "ok" })).unwrap();
        assert!(response.series.is_empty());
    }

    #[test]
    fn test_decode_error_body() {
        let body = serde_json::json!({ "errors": ["Forbidden"] });
        let parsed: ErrorBody = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.errors, vec!["Forbidden".to_string()]);
    }
}
