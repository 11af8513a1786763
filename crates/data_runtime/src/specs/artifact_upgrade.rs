//! Artifact upgrade cost table.
//!
//! Scope
//! - Five color tiers partition artifact levels 1..=100 contiguously.
//! - Each tier carries one component cost per level in its range and the
//!   number of components a chest of that tier yields.
//!
//! Deserialization runs `validate`, so an `ArtifactUpgradeTable` value is
//! always well-formed; calculators index into it without re-checking. The
//! sum of every cost in the table fits in a `u32`, so any partial sum (and
//! any chest count derived from one) does too.

use crate::error::TableError;
use crate::ids::{ArtifactTier, PerTier};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

pub const ARTIFACT_MIN_LEVEL: u32 = 1;
pub const ARTIFACT_MAX_LEVEL: u32 = 100;

/// Inclusive level range `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelRange {
    pub start: u32,
    pub end: u32,
}

impl LevelRange {
    /// Number of levels in the range (0 when `end < start`).
    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start + 1) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, level: u32) -> bool {
        (self.start..=self.end).contains(&level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactTierSpec {
    pub levels: LevelRange,
    /// `costs[i]` is the component cost of level `levels.start + i`.
    pub costs: Vec<u32>,
    /// Components per chest of this tier.
    pub chest_yield: NonZeroU32,
}

impl ArtifactTierSpec {
    /// Component cost of reaching `level`, if it lies in this tier.
    pub fn cost_of_level(&self, level: u32) -> Option<u32> {
        if !self.levels.contains(level) {
            return None;
        }
        self.costs.get((level - self.levels.start) as usize).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PerTier<ArtifactTierSpec>", into = "PerTier<ArtifactTierSpec>")]
pub struct ArtifactUpgradeTable {
    tiers: PerTier<ArtifactTierSpec>,
}

impl ArtifactUpgradeTable {
    pub fn new(tiers: PerTier<ArtifactTierSpec>) -> Result<Self, TableError> {
        validate(&tiers)?;
        Ok(Self { tiers })
    }

    pub fn tier(&self, tier: ArtifactTier) -> &ArtifactTierSpec {
        &self.tiers[tier]
    }

    pub fn tiers(&self) -> &PerTier<ArtifactTierSpec> {
        &self.tiers
    }

    /// Tier that owns `level`, if `level` is in 1..=100.
    pub fn tier_of_level(&self, level: u32) -> Option<ArtifactTier> {
        self.tiers
            .iter()
            .find(|(_, spec)| spec.levels.contains(level))
            .map(|(t, _)| t)
    }
}

impl TryFrom<PerTier<ArtifactTierSpec>> for ArtifactUpgradeTable {
    type Error = TableError;

    fn try_from(tiers: PerTier<ArtifactTierSpec>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<ArtifactUpgradeTable> for PerTier<ArtifactTierSpec> {
    fn from(table: ArtifactUpgradeTable) -> Self {
        table.tiers
    }
}

/// Check tier ranges, cost lengths and the table-wide cost total.
pub fn validate(tiers: &PerTier<ArtifactTierSpec>) -> Result<(), TableError> {
    let mut expected_start = ARTIFACT_MIN_LEVEL;
    let mut total: u32 = 0;
    for (tier, spec) in tiers.iter() {
        let LevelRange { start, end } = spec.levels;
        if start > end || start < ARTIFACT_MIN_LEVEL || end > ARTIFACT_MAX_LEVEL {
            return Err(TableError::TierRange { tier, start, end });
        }
        if start != expected_start {
            return Err(TableError::TierGap {
                tier,
                start,
                expected: expected_start,
            });
        }
        if spec.costs.len() != spec.levels.len() {
            return Err(TableError::TierLength {
                tier,
                expected: spec.levels.len(),
                actual: spec.costs.len(),
            });
        }
        total = spec
            .costs
            .iter()
            .try_fold(total, |acc, c| acc.checked_add(*c))
            .ok_or(TableError::TierCostOverflow { tier })?;
        expected_start = end + 1;
    }
    let last_end = expected_start - 1;
    if last_end != ARTIFACT_MAX_LEVEL {
        return Err(TableError::TierEnd {
            end: last_end,
            expected: ARTIFACT_MAX_LEVEL,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(start: u32, end: u32, chest_yield: u32) -> ArtifactTierSpec {
        ArtifactTierSpec {
            levels: LevelRange { start, end },
            costs: vec![1; (end - start + 1) as usize],
            chest_yield: NonZeroU32::new(chest_yield).unwrap(),
        }
    }

    fn sample() -> PerTier<ArtifactTierSpec> {
        PerTier {
            white: spec(1, 25, 20),
            green: spec(26, 50, 10),
            blue: spec(51, 70, 5),
            violet: spec(71, 85, 3),
            orange: spec(86, 100, 2),
        }
    }

    #[test]
    fn sample_validates() {
        let table = ArtifactUpgradeTable::new(sample()).expect("valid");
        assert_eq!(table.tier_of_level(1), Some(ArtifactTier::White));
        assert_eq!(table.tier_of_level(70), Some(ArtifactTier::Blue));
        assert_eq!(table.tier_of_level(71), Some(ArtifactTier::Violet));
        assert_eq!(table.tier_of_level(101), None);
    }

    #[test]
    fn gap_between_tiers_rejected() {
        let mut t = sample();
        t.blue = spec(52, 70, 5);
        assert_eq!(
            validate(&t),
            Err(TableError::TierGap {
                tier: ArtifactTier::Blue,
                start: 52,
                expected: 51
            })
        );
    }

    #[test]
    fn short_last_tier_rejected() {
        let mut t = sample();
        t.orange = spec(86, 99, 2);
        assert_eq!(validate(&t), Err(TableError::TierEnd { end: 99, expected: 100 }));
    }

    #[test]
    fn cost_length_must_match_range() {
        let mut t = sample();
        t.violet.costs.pop();
        assert_eq!(
            validate(&t),
            Err(TableError::TierLength {
                tier: ArtifactTier::Violet,
                expected: 15,
                actual: 14
            })
        );
    }

    #[test]
    fn zero_chest_yield_rejected_on_parse() {
        let mut v = serde_json::to_value(sample()).unwrap();
        v["green"]["chest_yield"] = 0.into();
        let err = serde_json::from_value::<ArtifactUpgradeTable>(v).unwrap_err();
        assert!(err.to_string().contains("nonzero"), "{err}");
    }

    #[test]
    fn cost_total_must_fit_u32() {
        let mut t = sample();
        t.violet.costs[0] = u32::MAX;
        assert_eq!(
            validate(&t),
            Err(TableError::TierCostOverflow {
                tier: ArtifactTier::Violet
            })
        );
        // Each tier fits on its own; only the running total overflows.
        let mut t = sample();
        t.white.costs[0] = u32::MAX / 2;
        t.orange.costs[0] = u32::MAX / 2;
        assert_eq!(
            validate(&t),
            Err(TableError::TierCostOverflow {
                tier: ArtifactTier::Orange
            })
        );
    }

    #[test]
    fn inverted_range_rejected() {
        let mut t = sample();
        t.white.levels = LevelRange { start: 25, end: 1 };
        assert!(matches!(validate(&t), Err(TableError::TierRange { .. })));
    }

    #[test]
    fn cost_of_level_indexes_from_start() {
        let mut s = spec(71, 85, 3);
        s.costs = (0..15).map(|i| 18 + 2 * i).collect();
        assert_eq!(s.cost_of_level(71), Some(18));
        assert_eq!(s.cost_of_level(81), Some(38));
        assert_eq!(s.cost_of_level(86), None);
    }

    #[test]
    fn deserialize_runs_validation() {
        let mut t = sample();
        t.orange.costs.push(1);
        let txt = serde_json::to_string(&t).unwrap();
        let err = serde_json::from_str::<ArtifactUpgradeTable>(&txt).unwrap_err();
        assert!(err.to_string().contains("16 costs for a range of 15 levels"), "{err}");
    }
}
