//! Data loaders for the upgrade cost tables.
//!
//! The shipped tables are compiled in with `include_str!`; any table can be
//! replaced by a JSON file on disk. Either way the JSON goes through the same
//! serde model, so validation runs before a table value exists.

use crate::specs::artifact_upgrade::ArtifactUpgradeTable;
use crate::specs::skin_upgrade::SkinUpgradeTable;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const EMBEDDED_ARTIFACT_JSON: &str =
    include_str!("../../../data/upgrades/artifact_upgrade.json");
pub const EMBEDDED_SKIN_JSON: &str = include_str!("../../../data/upgrades/skin_upgrade.json");

/// Root of `upgrades/` and `config/`. `HERODEX_DATA_DIR` wins; otherwise the
/// workspace `data/` so tests and tools can run from any crate.
pub fn data_root() -> PathBuf {
    if let Some(dir) = std::env::var_os("HERODEX_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let here = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

/// Absolute paths pass through; relative ones hang off `data_root()`.
pub fn resolve(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        data_root().join(path)
    }
}

/// Read a raw JSON file (relative to the data root) and return its string.
pub fn read_json(rel: impl AsRef<Path>) -> Result<String> {
    let path = resolve(rel);
    let s = fs::read_to_string(&path).with_context(|| format!("read data: {}", path.display()))?;
    Ok(s)
}

pub fn parse_artifact_table(txt: &str) -> Result<ArtifactUpgradeTable> {
    let table: ArtifactUpgradeTable =
        serde_json::from_str(txt).context("parse artifact upgrade json")?;
    Ok(table)
}

pub fn parse_skin_table(txt: &str) -> Result<SkinUpgradeTable> {
    let table: SkinUpgradeTable = serde_json::from_str(txt).context("parse skin upgrade json")?;
    Ok(table)
}

pub fn load_artifact_table(path: impl AsRef<Path>) -> Result<ArtifactUpgradeTable> {
    let path = path.as_ref();
    let txt = read_json(path)?;
    parse_artifact_table(&txt).with_context(|| format!("load {}", path.display()))
}

pub fn load_skin_table(path: impl AsRef<Path>) -> Result<SkinUpgradeTable> {
    let path = path.as_ref();
    let txt = read_json(path)?;
    parse_skin_table(&txt).with_context(|| format!("load {}", path.display()))
}

pub fn embedded_artifact_table() -> Result<ArtifactUpgradeTable> {
    parse_artifact_table(EMBEDDED_ARTIFACT_JSON).context("embedded artifact table")
}

pub fn embedded_skin_table() -> Result<SkinUpgradeTable> {
    parse_skin_table(EMBEDDED_SKIN_JSON).context("embedded skin table")
}
