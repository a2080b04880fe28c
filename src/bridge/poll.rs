//! The poll loop

use std::time::Duration;

use tokio::time::sleep;

use crate::config::Config;
use crate::datadog::DatadogClient;
use crate::monitor::MonitorDefinition;
use crate::osc::{OscClient, OscMessage};
use crate::series::evaluate_window;

use super::normalize::normalize;
use super::BridgeError;

/// Gap between the end of one cycle and the start of the next
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// One monitor in, two OSC channels out
pub struct Bridge {
    config: Config,
    definition: MonitorDefinition,
    datadog: DatadogClient,
    osc: OscClient,
}

impl Bridge {
    pub fn new(
        config: Config,
        definition: MonitorDefinition,
        datadog: DatadogClient,
        osc: OscClient,
    ) -> Self {
        Self {
            config,
            definition,
            datadog,
            osc,
        }
    }

    /// Poll until Ctrl-C or the first error
    ///
    /// The interval is measured from the end of one cycle to the start of
    /// the next, so slow API responses stretch the period rather than
    /// stacking requests.
    pub async fn run(&self) -> Result<(), BridgeError> {
        tracing::info!(
            monitor_id = self.definition.id,
            "Bridge started, polling every {:?}",
            POLL_INTERVAL
        );

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            self.cycle().await?;

            tokio::select! {
                _ = &mut ctrl_c => {
                    tracing::info!("Shutdown signal received");
                    return Ok(());
                }
                _ = sleep(POLL_INTERVAL) => {}
            }
        }
    }

    /// One cycle: query the window, evaluate, normalize, fetch the
    /// monitor state, send both OSC messages
    async fn cycle(&self) -> Result<(), BridgeError> {
        let (from, to) = window_bounds(self.definition.window.as_secs());

        let series = self
            .datadog
            .query_series(&self.definition.query, from, to)
            .await?;

        let evaluation = evaluate_window(
            &series,
            self.config.scope.as_deref(),
            &self.definition.function,
        )?;
        let value = normalize(evaluation, self.definition.threshold);

        let monitor = self.datadog.monitor(self.definition.id).await?;
        let alerting = monitor.is_alerting();

        tracing::info!(evaluation, value, alerting, "Evaluated monitor window");

        self.osc
            .send(&OscMessage::float(
                &self.config.osc.value_channel,
                value as f32,
            ))
            .await?;
        self.osc
            .send(&OscMessage::int(
                &self.config.osc.threshold_channel,
                i32::from(alerting),
            ))
            .await?;

        Ok(())
    }
}

/// Query bounds covering the monitor's window, ending now (epoch seconds)
fn window_bounds(window_secs: u64) -> (i64, i64) {
    let to = chrono::Utc::now().timestamp();
    (to - window_secs as i64, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_bounds_span() {
        let (from, to) = window_bounds(300);
        assert_eq!(to - from, 300);

        let now = chrono::Utc::now().timestamp();
        assert!((now - to).abs() <= 1);
    }

    #[test]
    fn test_window_bounds_hours() {
        let (from, to) = window_bounds(7200);
        assert_eq!(to - from, 7200);
    }
}
