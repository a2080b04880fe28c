//! Fader: drive an OSC control surface from a Datadog monitor
//!
//! Polls one Datadog metric monitor, replays its series query over the
//! monitor's evaluation window, and normalizes the evaluated value
//! against the critical threshold into a 0..1 fader position. Every five
//! seconds two OSC messages go out over UDP: the position as a float32
//! and the monitor's alert state as an int32 flag.
//!
//! Any failure is fatal. The bridge is a fixture in a feedback loop, not
//! a supervisor: a stale fader position is worse than a dead process.
//!
//! # Example
//!
//! ```
//! use fader::monitor::parse_expression;
//!
//! let expr = parse_expression("avg(last_5m):avg:system.cpu.user{*} > 80").unwrap();
//! assert_eq!(expr.function, "avg");
//! assert_eq!(expr.query, "avg:system.cpu.user{*}");
//! assert_eq!(expr.window.as_secs(), 300);
//! ```

pub mod bridge;
pub mod config;
pub mod datadog;
pub mod monitor;
pub mod osc;
pub mod series;

// Re-export commonly used types
pub use bridge::{Bridge, BridgeError};
pub use config::{Args, Config};
pub use datadog::{ApiError, DatadogClient};
pub use monitor::{MonitorDefinition, MonitorExpression};
pub use osc::{OscClient, OscMessage};
