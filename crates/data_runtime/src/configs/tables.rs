//! Cost table sources loaded from data/config/tables.toml.
//!
//! Unset paths mean "use the embedded table". Relative paths resolve against
//! the data root, absolute ones are used as given.

use crate::loader::data_root;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TablesCfg {
    pub artifact_path: Option<PathBuf>,
    pub skin_path: Option<PathBuf>,
}

pub fn load_default() -> Result<TablesCfg> {
    let path = data_root().join("config/tables.toml");
    let mut cfg = if path.is_file() {
        let txt =
            std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str::<TablesCfg>(&txt).context("parse tables TOML")?
    } else {
        TablesCfg::default()
    };
    if let Some(p) = std::env::var_os("ARTIFACT_TABLE") {
        cfg.artifact_path = Some(PathBuf::from(p));
    }
    if let Some(p) = std::env::var_os("SKIN_TABLE") {
        cfg.skin_path = Some(PathBuf::from(p));
    }
    Ok(cfg)
}
