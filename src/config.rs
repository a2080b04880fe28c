//! CLI flags and runtime configuration
//!
//! Every flag falls back to an environment variable so the bridge runs
//! the same way from a shell, a unit file, or a container. A flag wins
//! over its variable, the variable over the built-in default.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fader")]
#[command(about = "Drives an OSC control surface from a Datadog monitor")]
pub struct Args {
    /// Host the OSC messages are sent to
    #[arg(long = "ip", env = "OSC_IP", default_value = "127.0.0.1")]
    pub ip: String,

    /// Port the OSC server is listening on
    #[arg(long, env = "OSC_PORT", default_value = "7001")]
    pub port: u16,

    /// ID of the Datadog monitor to poll
    #[arg(long, env = "DATADOG_MONITOR")]
    pub monitor: Option<u64>,

    /// Scope to select when the query returns several series, e.g. "host:web-1"
    #[arg(long, env = "DATADOG_SCOPE")]
    pub scope: Option<String>,

    /// OSC address the normalized value is sent on
    #[arg(long, env = "OSC_VALUE_CHANNEL", default_value = "/ch/1")]
    pub value: String,

    /// OSC address the alert flag is sent on
    #[arg(long, env = "OSC_THRESHOLD_CHANNEL", default_value = "/ch/2")]
    pub threshold: String,
}

/// Fully resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub monitor_id: u64,
    pub scope: Option<String>,
    pub datadog: DatadogConfig,
    pub osc: OscConfig,
}

/// Datadog site and credentials
#[derive(Debug, Clone)]
pub struct DatadogConfig {
    pub site: String,
    pub api_key: String,
    pub app_key: String,
}

/// Where and on which addresses the OSC messages go
#[derive(Debug, Clone)]
pub struct OscConfig {
    pub host: String,
    pub port: u16,
    pub value_channel: String,
    pub threshold_channel: String,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let monitor_id = args.monitor.ok_or(ConfigError::MissingMonitor)?;

        Ok(Self {
            monitor_id,
            scope: args.scope,
            datadog: DatadogConfig::from_env(),
            osc: OscConfig {
                host: args.ip,
                port: args.port,
                value_channel: args.value,
                threshold_channel: args.threshold,
            },
        })
    }
}

impl DatadogConfig {
    /// Read site and credentials from the environment
    ///
    /// Missing keys are sent as empty headers; the API answers 403 and the
    /// startup monitor fetch reports it like any other fatal error.
    pub fn from_env() -> Self {
        Self {
            site: std::env::var("DATADOG_SITE").unwrap_or_else(|_| "datadoghq.com".to_string()),
            api_key: std::env::var("DATADOG_API_KEY").unwrap_or_default(),
            app_key: std::env::var("DATADOG_APP_KEY").unwrap_or_default(),
        }
    }

    pub fn base_url(&self) -> String {
        format!("https://api.{}", self.site)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no monitor configured; pass one via --monitor or DATADOG_MONITOR")]
    MissingMonitor,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(monitor: Option<u64>) -> Args {
        Args {
            ip: "127.0.0.1".to_string(),
            port: 7001,
            monitor,
            scope: None,
            value: "/ch/1".to_string(),
            threshold: "/ch/2".to_string(),
        }
    }

    #[test]
    fn test_missing_monitor() {
        let result = Config::from_args(args(None));
        assert!(matches!(result, Err(ConfigError::MissingMonitor)));
    }

    #[test]
    fn test_resolved_config() {
        let config = Config::from_args(args(Some(42))).unwrap();
        assert_eq!(config.monitor_id, 42);
        assert_eq!(config.osc.host, "127.0.0.1");
        assert_eq!(config.osc.port, 7001);
        assert_eq!(config.osc.value_channel, "/ch/1");
        assert_eq!(config.osc.threshold_channel, "/ch/2");
    }

    #[test]
    fn test_flag_parsing() {
        let args = Args::try_parse_from([
            "fader",
            "--monitor",
            "4271234",
            "--ip",
            "10.0.0.5",
            "--port",
            "9000",
            "--scope",
            "host:web-1",
            "--value",
            "/fader/3",
            "--threshold",
            "/led/1",
        ])
        .unwrap();

        assert_eq!(args.monitor, Some(4271234));
        assert_eq!(args.ip, "10.0.0.5");
        assert_eq!(args.port, 9000);
        assert_eq!(args.scope.as_deref(), Some("host:web-1"));
        assert_eq!(args.value, "/fader/3");
        assert_eq!(args.threshold, "/led/1");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = Args::try_parse_from(["fader", "--port", "70000"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_base_url() {
        let config = DatadogConfig {
            site: "datadoghq.eu".to_string(),
            api_key: String::new(),
            app_key: String::new(),
        };
        assert_eq!(config.base_url(), "https://api.datadoghq.eu");
    }
}
