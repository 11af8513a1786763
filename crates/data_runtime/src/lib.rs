//! data_runtime: cost-table schemas and loaders.
//!
//! Holds the typed artifact and skin upgrade tables, their validation, and the
//! small TOML configs the binaries read at startup, so calculators and tools
//! depend on one stable data API.

pub mod error;
pub mod ids;
pub mod loader;
pub mod specdb;
pub mod specs {
    pub mod artifact_upgrade;
    pub mod skin_upgrade;
}
pub mod configs {
    pub mod tables;
    pub mod telemetry;
}

pub use error::TableError;
pub use ids::{ArtifactTier, PerSkin, PerTier, SkinType};
pub use specdb::UpgradeSpecDb;
