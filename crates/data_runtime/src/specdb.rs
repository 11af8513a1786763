//! UpgradeSpecDb: canonical facade for the upgrade cost tables.
//!
//! Loads both tables once per process and hands out a shared `&'static`
//! reference. Everything behind it is immutable after load.

use crate::configs::tables::TablesCfg;
use crate::loader;
use crate::specs::artifact_upgrade::ArtifactUpgradeTable;
use crate::specs::skin_upgrade::SkinUpgradeTable;
use anyhow::Result;
use std::sync::OnceLock;

static SHARED: OnceLock<UpgradeSpecDb> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeSpecDb {
    pub artifact: ArtifactUpgradeTable,
    pub skin: SkinUpgradeTable,
}

impl UpgradeSpecDb {
    /// Tables compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            artifact: loader::embedded_artifact_table()?,
            skin: loader::embedded_skin_table()?,
        })
    }

    /// Configured files where set, embedded tables otherwise.
    pub fn load(cfg: &TablesCfg) -> Result<Self> {
        let artifact = match &cfg.artifact_path {
            Some(p) => {
                tracing::info!(target: "tables", path = %loader::resolve(p).display(), "artifact table from file");
                loader::load_artifact_table(p)?
            }
            None => loader::embedded_artifact_table()?,
        };
        let skin = match &cfg.skin_path {
            Some(p) => {
                tracing::info!(target: "tables", path = %loader::resolve(p).display(), "skin table from file");
                loader::load_skin_table(p)?
            }
            None => loader::embedded_skin_table()?,
        };
        Ok(Self { artifact, skin })
    }

    /// Load per `cfg` on first call; later calls return the first instance
    /// and ignore `cfg`.
    pub fn load_shared(cfg: &TablesCfg) -> Result<&'static UpgradeSpecDb> {
        if let Some(db) = SHARED.get() {
            return Ok(db);
        }
        let db = Self::load(cfg)?;
        let shared = SHARED.get_or_init(|| db);
        tracing::info!(
            target: "tables",
            other_skins = shared.skin.other_skin_names().len(),
            "upgrade tables loaded"
        );
        Ok(shared)
    }
}
