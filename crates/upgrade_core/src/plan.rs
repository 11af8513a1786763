//! Multi-skin planning: total stones for several skins at once.

use crate::error::CalcError;
use crate::skin::{SkinUpgrade, SkinUpgradeOptions, calculate_skin_upgrade};
use data_runtime::SkinType;
use data_runtime::specs::skin_upgrade::SkinUpgradeTable;
use serde::{Deserialize, Serialize};

pub const PLAN_TOTAL_MESSAGE: &str = "Plan total exceeds 4294967295 skin stones";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkinPlanEntry {
    pub skin: SkinType,
    pub level: i64,
    #[serde(default)]
    pub include_unlock_cost: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkinPlan {
    /// One result per entry, in input order.
    pub entries: Vec<SkinUpgrade>,
    /// Chests are rounded once on the summed stones, not per entry.
    pub total: SkinUpgrade,
}

/// Price every entry; the first invalid level, or a total past `u32::MAX`,
/// fails the whole plan.
pub fn plan_skins(
    table: &SkinUpgradeTable,
    entries: &[SkinPlanEntry],
) -> Result<SkinPlan, CalcError> {
    let upgrades = entries
        .iter()
        .map(|e| {
            calculate_skin_upgrade(
                table,
                e.skin,
                e.level,
                SkinUpgradeOptions {
                    include_unlock_cost: e.include_unlock_cost,
                },
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    let stones = upgrades
        .iter()
        .try_fold(0u32, |acc, u| acc.checked_add(u.stones))
        .ok_or_else(|| CalcError::InvalidArgument(PLAN_TOTAL_MESSAGE.to_string()))?;
    Ok(SkinPlan {
        entries: upgrades,
        total: SkinUpgrade::from_stones(stones),
    })
}
