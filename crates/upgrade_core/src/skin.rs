//! Skin upgrade calculator: skin stones and chests from a level to 60.

use crate::chests::{chest_size, chests_for};
use crate::error::CalcError;
use crate::level::{self, LevelArg};
use data_runtime::SkinType;
use data_runtime::specs::skin_upgrade::{SKIN_MAX_LEVEL, SkinUpgradeTable};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

pub const SKIN_LEVEL_MESSAGE: &str = "Current level must be an integer between 0 and 60 inclusive";

/// Stones in a small skin-stone chest.
pub const SMALL_CHEST_STONES: NonZeroU32 = chest_size(10);
/// Stones in a large skin-stone chest.
pub const LARGE_CHEST_STONES: NonZeroU32 = chest_size(150);
/// One-time cost to obtain an "other" skin before it can be leveled.
pub const OTHER_SKIN_UNLOCK_STONES: u32 = 5000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinUpgradeOptions {
    /// At level 0, price an "other" skin's unlock instead of returning zero.
    #[serde(default)]
    pub include_unlock_cost: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkinUpgrade {
    pub stones: u32,
    pub small_chests: u32,
    pub large_chests: u32,
}

impl SkinUpgrade {
    pub fn from_stones(stones: u32) -> Self {
        Self {
            stones,
            small_chests: chests_for(stones, SMALL_CHEST_STONES),
            large_chests: chests_for(stones, LARGE_CHEST_STONES),
        }
    }
}

/// Stones and chests to take a skin from `current_level` to 60.
///
/// Level 0 means the skin is not owned: the result is zero unless an "other"
/// skin's unlock cost is requested. Level 60 is maxed. Otherwise the skin's
/// cost curve is summed from `current_level` to its last entry.
pub fn calculate_skin_upgrade<L: LevelArg>(
    table: &SkinUpgradeTable,
    skin: SkinType,
    current_level: L,
    options: SkinUpgradeOptions,
) -> Result<SkinUpgrade, CalcError> {
    let current = level::checked(current_level, 0, SKIN_MAX_LEVEL, SKIN_LEVEL_MESSAGE)?;
    if current == 0 {
        if skin == SkinType::Other && options.include_unlock_cost {
            return Ok(SkinUpgrade::from_stones(OTHER_SKIN_UNLOCK_STONES));
        }
        return Ok(SkinUpgrade::default());
    }
    if current == SKIN_MAX_LEVEL {
        return Ok(SkinUpgrade::default());
    }
    let stones: u32 = table
        .skin(skin)
        .costs
        .get(current as usize..)
        .map(|rest| rest.iter().sum())
        .unwrap_or(0);
    Ok(SkinUpgrade::from_stones(stones))
}

/// Display names of "other" skins, alphabetically.
pub fn other_skin_names(table: &SkinUpgradeTable) -> &[String] {
    table.other_skin_names()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_stones_rounds_both_chest_sizes_up() {
        assert_eq!(
            SkinUpgrade::from_stones(OTHER_SKIN_UNLOCK_STONES),
            SkinUpgrade {
                stones: 5000,
                small_chests: 500,
                large_chests: 34
            }
        );
        assert_eq!(SkinUpgrade::from_stones(0), SkinUpgrade::default());
        assert_eq!(SkinUpgrade::from_stones(151).large_chests, 2);
    }

    #[test]
    fn options_default_off() {
        let o: SkinUpgradeOptions = serde_json::from_str("{}").unwrap();
        assert!(!o.include_unlock_cost);
    }
}
