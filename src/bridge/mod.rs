//! The monitor-to-OSC bridge
//!
//! Ties the other modules together: every cycle the monitor's series
//! query is replayed over its evaluation window, the result is
//! normalized against the critical threshold, and the value plus the
//! monitor's alert state go out as two OSC messages.

pub mod normalize;
pub mod poll;

pub use normalize::normalize;
pub use poll::{Bridge, POLL_INTERVAL};

use crate::config::ConfigError;
use crate::datadog::ApiError;
use crate::monitor::DefinitionError;
use crate::series::EvaluateError;

/// Any failure that ends a run; the bridge does not retry
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Monitor error: {0}")]
    Definition(#[from] DefinitionError),

    #[error("Datadog error: {0}")]
    Api(#[from] ApiError),

    #[error("Evaluation error: {0}")]
    Evaluate(#[from] EvaluateError),

    #[error("OSC transport error: {0}")]
    Transport(#[from] std::io::Error),
}
