//! Validation errors for cost tables. Loaders wrap these with file context.

use crate::ids::{ArtifactTier, SkinType};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("artifact tier {tier}: level range {start}..={end} is empty or outside 1..=100")]
    TierRange { tier: ArtifactTier, start: u32, end: u32 },
    #[error("artifact tier {tier}: starts at {start}, expected {expected} (tiers must cover 1..=100 contiguously)")]
    TierGap { tier: ArtifactTier, start: u32, expected: u32 },
    #[error("artifact tiers end at {end}, expected {expected}")]
    TierEnd { end: u32, expected: u32 },
    #[error("artifact tier {tier}: {actual} costs for a range of {expected} levels")]
    TierLength { tier: ArtifactTier, expected: usize, actual: usize },
    #[error("artifact tier {tier}: cumulative component cost exceeds {max}", max = u32::MAX)]
    TierCostOverflow { tier: ArtifactTier },
    #[error("skin {skin}: max_level is {actual}, expected {expected}")]
    MaxLevel { skin: SkinType, actual: u32, expected: u32 },
    #[error("skin {skin}: {actual} costs, need at least {min}")]
    ShortCosts { skin: SkinType, actual: usize, min: usize },
    #[error("skin {skin}: total stone cost exceeds {max}", max = u32::MAX)]
    SkinCostOverflow { skin: SkinType },
    #[error("other_skin_names is empty")]
    EmptyNames,
    #[error("other_skin_names contains a blank entry")]
    BlankName,
    #[error("other_skin_names lists '{0}' twice")]
    DuplicateName(String),
}
