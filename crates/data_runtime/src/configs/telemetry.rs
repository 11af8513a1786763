//! Telemetry configuration loaded from data/config/telemetry.toml with env overrides.

use crate::loader::data_root;
use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryCfg {
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
}

impl Default for TelemetryCfg {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            json_logs: Some(false),
        }
    }
}

pub fn load_default() -> Result<TelemetryCfg> {
    let path = data_root().join("config/telemetry.toml");
    let mut cfg = if path.is_file() {
        let txt = std::fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<TelemetryCfg>(&txt).context("parse telemetry TOML")?
    } else {
        TelemetryCfg::default()
    };
    // Env overrides
    if let Ok(lvl) = std::env::var("LOG_LEVEL") {
        cfg.log_level = Some(lvl);
    }
    if let Some(json) = std::env::var("JSON_LOGS").ok().and_then(|v| v.parse().ok()) {
        cfg.json_logs = Some(json);
    }
    Ok(cfg)
}
