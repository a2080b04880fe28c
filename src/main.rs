//! Fader
//!
//! Run with: cargo run -- --monitor <id>
//!
//! Environment variables (each shadowed by the matching flag):
//! - DATADOG_MONITOR: ID of the monitor to poll (--monitor)
//! - DATADOG_SCOPE: Scope to select when the query returns several series (--scope)
//! - DATADOG_SITE: API site (default: datadoghq.com)
//! - DATADOG_API_KEY / DATADOG_APP_KEY: API credentials
//! - OSC_IP / OSC_PORT: OSC server (defaults: 127.0.0.1, 7001)
//! - OSC_VALUE_CHANNEL / OSC_THRESHOLD_CHANNEL: Addresses (defaults: /ch/1, /ch/2)
//! - RUST_LOG: Log level (default: info)

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fader::bridge::{Bridge, BridgeError};
use fader::config::{Args, Config};
use fader::datadog::DatadogClient;
use fader::monitor::MonitorDefinition;
use fader::osc::OscClient;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fader=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        tracing::error!(error = %e, "Fatal error");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), BridgeError> {
    let config = Config::from_args(args)?;

    let datadog = DatadogClient::new(&config.datadog);
    let monitor = datadog.monitor(config.monitor_id).await?;
    let definition = MonitorDefinition::from_monitor(&monitor)?;

    tracing::info!("Fader configuration:");
    tracing::info!("  Monitor: {}", definition.id);
    tracing::info!("  Query: {}", definition.raw_query);
    tracing::info!(
        "  Window: {} ({} seconds)",
        definition.window,
        definition.window.as_secs()
    );
    tracing::info!("  Critical threshold: {}", definition.threshold);
    match &config.scope {
        Some(scope) => tracing::info!("  Scope: {}", scope),
        None => tracing::info!("  Scope: (single series expected)"),
    }
    tracing::info!("  Datadog site: {}", config.datadog.site);
    tracing::info!("  OSC target: {}:{}", config.osc.host, config.osc.port);
    tracing::info!("  Value channel: {}", config.osc.value_channel);
    tracing::info!("  Threshold channel: {}", config.osc.threshold_channel);

    let osc = OscClient::connect(&config.osc.host, config.osc.port).await?;

    Bridge::new(config, definition, datadog, osc).run().await
}
