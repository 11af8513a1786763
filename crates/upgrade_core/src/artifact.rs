//! Artifact upgrade calculator: components and chests from a level to 100.

use crate::chests::chests_for;
use crate::error::CalcError;
use crate::level::{self, LevelArg};
use data_runtime::specs::artifact_upgrade::{
    ARTIFACT_MAX_LEVEL, ARTIFACT_MIN_LEVEL, ArtifactUpgradeTable,
};
use data_runtime::{ArtifactTier, PerTier};
use serde::Serialize;

pub const ARTIFACT_LEVEL_MESSAGE: &str =
    "Current level must be an integer between 1 and 100 inclusive.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtifactUpgrade {
    pub components: PerTier<u32>,
    pub chests: PerTier<u32>,
    pub total_chests: u32,
}

impl ArtifactUpgrade {
    /// Nothing left to buy.
    pub fn is_maxed(&self) -> bool {
        self.total_chests == 0 && self.components.values().all(|c| *c == 0)
    }
}

/// Components and chests per tier needed to take an artifact from
/// `current_level` to 100.
///
/// A tier the artifact has already finished (`current_level >= end`) stays
/// at zero. Otherwise the tier's costs for levels
/// `max(current_level + 1, start)..=end` are summed and rounded up to whole
/// chests of that tier.
pub fn calculate_artifact_upgrade<L: LevelArg>(
    table: &ArtifactUpgradeTable,
    current_level: L,
) -> Result<ArtifactUpgrade, CalcError> {
    let current = level::checked(
        current_level,
        ARTIFACT_MIN_LEVEL,
        ARTIFACT_MAX_LEVEL,
        ARTIFACT_LEVEL_MESSAGE,
    )?;
    let mut out = ArtifactUpgrade::default();
    for tier in ArtifactTier::ALL {
        let spec = table.tier(tier);
        if current >= spec.levels.end {
            continue;
        }
        let first = (current + 1).max(spec.levels.start);
        // Bounded by the table-wide total checked at load.
        let cost: u32 = (first..=spec.levels.end)
            .filter_map(|lvl| spec.cost_of_level(lvl))
            .sum();
        out.components[tier] = cost;
        if cost > 0 {
            let chests = chests_for(cost, spec.chest_yield);
            out.chests[tier] = chests;
            out.total_chests += chests;
        }
    }
    Ok(out)
}
