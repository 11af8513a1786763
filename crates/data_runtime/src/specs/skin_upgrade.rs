//! Skin upgrade cost table and the "other" skin name list.
//!
//! `costs[i]` is the stone cost of advancing from level `i` to `i + 1`. The
//! default skin's curve carries one extra leading entry (61 values); every
//! other curve has 60. Consumers sum from the current level to the end of
//! whichever curve they get, so the shape is kept as shipped. Each curve's
//! full sum fits in a `u32`.

use crate::error::TableError;
use crate::ids::{PerSkin, SkinType};
use serde::{Deserialize, Serialize};

pub const SKIN_MAX_LEVEL: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkinSpec {
    pub name: String,
    pub max_level: u32,
    pub costs: Vec<u32>,
}

/// On-disk shape of `data/upgrades/skin_upgrade.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkinUpgradeFile {
    pub skins: PerSkin<SkinSpec>,
    pub other_skin_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SkinUpgradeFile", into = "SkinUpgradeFile")]
pub struct SkinUpgradeTable {
    skins: PerSkin<SkinSpec>,
    other_skin_names: Vec<String>,
}

impl SkinUpgradeTable {
    /// Validate and normalize: names are stored in lexicographic order.
    pub fn new(file: SkinUpgradeFile) -> Result<Self, TableError> {
        let SkinUpgradeFile {
            skins,
            mut other_skin_names,
        } = file;
        for (skin, spec) in skins.iter() {
            if spec.max_level != SKIN_MAX_LEVEL {
                return Err(TableError::MaxLevel {
                    skin,
                    actual: spec.max_level,
                    expected: SKIN_MAX_LEVEL,
                });
            }
            if spec.costs.len() < SKIN_MAX_LEVEL as usize {
                return Err(TableError::ShortCosts {
                    skin,
                    actual: spec.costs.len(),
                    min: SKIN_MAX_LEVEL as usize,
                });
            }
            spec.costs
                .iter()
                .try_fold(0u32, |acc, c| acc.checked_add(*c))
                .ok_or(TableError::SkinCostOverflow { skin })?;
        }
        if other_skin_names.is_empty() {
            return Err(TableError::EmptyNames);
        }
        if other_skin_names.iter().any(|n| n.trim().is_empty()) {
            return Err(TableError::BlankName);
        }
        other_skin_names.sort();
        if let Some(pair) = other_skin_names.windows(2).find(|w| w[0] == w[1]) {
            return Err(TableError::DuplicateName(pair[0].clone()));
        }
        Ok(Self {
            skins,
            other_skin_names,
        })
    }

    pub fn skin(&self, skin: SkinType) -> &SkinSpec {
        &self.skins[skin]
    }

    pub fn skins(&self) -> &PerSkin<SkinSpec> {
        &self.skins
    }

    /// Display names of "other" skins, sorted.
    pub fn other_skin_names(&self) -> &[String] {
        &self.other_skin_names
    }
}

impl TryFrom<SkinUpgradeFile> for SkinUpgradeTable {
    type Error = TableError;

    fn try_from(file: SkinUpgradeFile) -> Result<Self, Self::Error> {
        Self::new(file)
    }
}

impl From<SkinUpgradeTable> for SkinUpgradeFile {
    fn from(table: SkinUpgradeTable) -> Self {
        SkinUpgradeFile {
            skins: table.skins,
            other_skin_names: table.other_skin_names,
        }
    }
}
