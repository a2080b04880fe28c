use std::fmt;

/// Parsed monitor query expression
///
/// Datadog metric monitors carry a query of the shape
/// `avg(last_5m):avg:system.cpu.user{host:web-1} > 80`. The bridge only
/// needs the aggregation function, the series query, and the evaluation
/// window; the threshold itself comes from the monitor options.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorExpression {
    /// Aggregation function, e.g. "avg"
    pub function: String,
    /// Series query handed back to the metrics API, e.g. "avg:system.cpu.user{*}"
    pub query: String,
    /// Evaluation window the monitor looks back over
    pub window: EvaluationWindow,
}

/// Evaluation window, e.g. `last_5m`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationWindow {
    pub magnitude: u64,
    pub unit: WindowUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowUnit {
    Minutes,
    Hours,
}

impl EvaluationWindow {
    /// Window length in seconds
    pub fn as_secs(&self) -> u64 {
        match self.unit {
            WindowUnit::Minutes => self.magnitude * 60,
            WindowUnit::Hours => self.magnitude * 3600,
        }
    }
}

impl fmt::Display for EvaluationWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            WindowUnit::Minutes => write!(f, "{}m", self.magnitude),
            WindowUnit::Hours => write!(f, "{}h", self.magnitude),
        }
    }
}

/// Parse a monitor query expression
pub fn parse_expression(raw: &str) -> Result<MonitorExpression, ExpressionError> {
    if raw.contains("anomalies") {
        return Err(ExpressionError::AnomalyMonitor);
    }

    // The comparison clause is always the last two tokens: `<comparator> <threshold>`.
    // The head may itself contain spaces (template variables, boolean operators).
    let mut tail = raw.trim().rsplitn(3, ' ');
    let _threshold_literal = tail.next();
    let comparator = tail.next().ok_or(ExpressionError::MissingComparison)?;
    let head = tail.next().ok_or(ExpressionError::MissingComparison)?;

    if comparator != ">" {
        return Err(ExpressionError::UnsupportedComparator(comparator.to_string()));
    }

    let (aggregation, query) = head
        .split_once(':')
        .ok_or(ExpressionError::MissingSeriesQuery)?;
    if query.is_empty() {
        return Err(ExpressionError::MissingSeriesQuery);
    }

    let (function, window_spec) = aggregation
        .split_once('(')
        .and_then(|(function, rest)| rest.strip_suffix(')').map(|spec| (function, spec)))
        .ok_or_else(|| ExpressionError::MalformedAggregation(aggregation.to_string()))?;

    let window = parse_window(window_spec)?;

    Ok(MonitorExpression {
        function: function.to_string(),
        query: query.to_string(),
        window,
    })
}

fn parse_window(spec: &str) -> Result<EvaluationWindow, ExpressionError> {
    // "last_5m" and a bare "5m" both resolve to the trailing token
    let token = spec.rsplit_once('_').map_or(spec, |(_, token)| token);

    let (digits, unit) = match token.char_indices().last() {
        Some((idx, 'h')) => (&token[..idx], WindowUnit::Hours),
        Some((idx, _)) => (&token[..idx], WindowUnit::Minutes),
        None => return Err(ExpressionError::InvalidWindow(spec.to_string())),
    };

    let magnitude: u64 = digits
        .parse()
        .map_err(|_| ExpressionError::InvalidWindow(spec.to_string()))?;

    Ok(EvaluationWindow { magnitude, unit })
}

#[derive(Debug, thiserror::Error)]
pub enum ExpressionError {
    #[error("anomaly monitors are currently unsupported")]
    AnomalyMonitor,

    #[error("only > comparisons are currently supported (got {0:?})")]
    UnsupportedComparator(String),

    #[error("monitor query has no comparison clause")]
    MissingComparison,

    #[error("monitor query has no series query after the aggregation")]
    MissingSeriesQuery,

    #[error("malformed aggregation clause: {0:?}")]
    MalformedAggregation(String),

    #[error("invalid evaluation window: {0:?}")]
    InvalidWindow(String),
}
