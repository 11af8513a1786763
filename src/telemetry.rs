//! Telemetry bootstrap (tracing to stderr, optional JSON lines).

use anyhow::{Context, Result};
use data_runtime::configs::telemetry::TelemetryCfg;

/// Install the global subscriber. Fails if one is already set.
pub fn init_telemetry(cfg: &TelemetryCfg) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};
    let level = cfg.log_level.clone().unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries command output; logs go to stderr.
    let fmt_layer = if cfg.json_logs.unwrap_or(false) {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).boxed()
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("install tracing subscriber")?;
    tracing::debug!(
        target: "telemetry",
        log_level = ?cfg.log_level,
        json_logs = ?cfg.json_logs,
        "telemetry initialized"
    );
    Ok(())
}
