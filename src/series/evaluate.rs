use std::collections::BTreeSet;

use super::{reduce, ScopedSeries};

/// Reduce a metric query response to the monitor's evaluated value
///
/// Selects one series (filtered by `scope` when given, last match wins),
/// drops null points, and applies the monitor's aggregation function to
/// what remains. Negative samples abort evaluation: the bridge maps the
/// result onto a 0..1 fader position and has no meaningful rendering for
/// them.
pub fn evaluate_window(
    series: &[ScopedSeries],
    scope: Option<&str>,
    function: &str,
) -> Result<f64, EvaluateError> {
    if series.is_empty() {
        return Err(EvaluateError::NoSeries);
    }

    let selected = select_series(series, scope)?;

    let mut values = Vec::with_capacity(selected.points.len());
    for point in &selected.points {
        let Some(value) = point.value else {
            continue;
        };
        if value < 0.0 {
            return Err(EvaluateError::NegativeValue {
                timestamp: point.timestamp,
                value,
            });
        }
        values.push(value);
    }

    match function {
        "avg" => reduce::mean(&values).ok_or(EvaluateError::EmptyWindow),
        other => Err(EvaluateError::UnsupportedFunction(other.to_string())),
    }
}

fn select_series<'a>(
    series: &'a [ScopedSeries],
    scope: Option<&str>,
) -> Result<&'a ScopedSeries, EvaluateError> {
    match scope {
        Some(scope) => series
            .iter()
            .rev()
            .find(|s| s.scope == scope)
            .ok_or_else(|| EvaluateError::NoMatchingSeries {
                scope: scope.to_string(),
            }),
        None => {
            let scopes: BTreeSet<&str> = series.iter().map(|s| s.scope.as_str()).collect();
            if scopes.len() > 1 {
                return Err(EvaluateError::AmbiguousScope(
                    scopes.into_iter().map(String::from).collect(),
                ));
            }
            series.last().ok_or(EvaluateError::NoSeries)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EvaluateError {
    #[error("query returned no series")]
    NoSeries,

    #[error("no series matched scope {scope:?}")]
    NoMatchingSeries { scope: String },

    #[error(
        "query returned multiple scopes ({}); pass a scope via --scope or DATADOG_SCOPE",
        .0.join(", ")
    )]
    AmbiguousScope(Vec<String>),

    #[error("negative metrics are currently unsupported (got {value} at {timestamp})")]
    NegativeValue { timestamp: f64, value: f64 },

    #[error("window contained no usable points")]
    EmptyWindow,

    #[error("only average thresholds are currently supported (got {0:?})")]
    UnsupportedFunction(String),
}
