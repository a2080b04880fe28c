//! Validated monitor definition
//!
//! Everything the poll loop needs from the monitor, checked once at
//! startup so a bad monitor fails before the first cycle.

use crate::datadog::model::Monitor;

use super::expression::{parse_expression, EvaluationWindow, ExpressionError};

/// The shape of the monitor the bridge drives
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorDefinition {
    pub id: u64,
    /// The full expression as configured in Datadog, kept for logging
    pub raw_query: String,
    /// Aggregation function applied to the window
    pub function: String,
    /// Series query sent to the metrics API every cycle
    pub query: String,
    pub window: EvaluationWindow,
    /// Critical threshold the evaluated value is normalized against
    pub threshold: f64,
}

impl MonitorDefinition {
    pub fn from_monitor(monitor: &Monitor) -> Result<Self, DefinitionError> {
        let expression = parse_expression(&monitor.query)?;

        if expression.function != "avg" {
            return Err(DefinitionError::UnsupportedFunction(expression.function));
        }

        let threshold = monitor
            .options
            .thresholds
            .critical
            .ok_or(DefinitionError::MissingThreshold)?;
        if threshold == 0.0 {
            return Err(DefinitionError::ZeroThreshold);
        }

        Ok(Self {
            id: monitor.id,
            raw_query: monitor.query.clone(),
            function: expression.function,
            query: expression.query,
            window: expression.window,
            threshold,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error(transparent)]
    Expression(#[from] ExpressionError),

    #[error("only average thresholds are currently supported (got {0:?})")]
    UnsupportedFunction(String),

    #[error("monitor has no critical threshold configured")]
    MissingThreshold,

    #[error("monitor critical threshold is zero")]
    ZeroThreshold,
}
