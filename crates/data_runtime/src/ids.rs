//! Stable identifiers for cost-table records (artifact tiers, skin types).
//!
//! Both enums are closed: tables are keyed by them through `PerTier` /
//! `PerSkin`, so a missing or extra key is a load error, never a lookup miss.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Artifact color tier. Declaration order is upgrade order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactTier {
    White,
    Green,
    Blue,
    Violet,
    Orange,
}

impl ArtifactTier {
    pub const ALL: [ArtifactTier; 5] = [
        ArtifactTier::White,
        ArtifactTier::Green,
        ArtifactTier::Blue,
        ArtifactTier::Violet,
        ArtifactTier::Orange,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactTier::White => "white",
            ArtifactTier::Green => "green",
            ArtifactTier::Blue => "blue",
            ArtifactTier::Violet => "violet",
            ArtifactTier::Orange => "orange",
        }
    }
}

/// Skin category; each has its own per-level stone cost curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Default,
    Champion,
    Winter,
    Other,
}

impl SkinType {
    pub const ALL: [SkinType; 4] = [
        SkinType::Default,
        SkinType::Champion,
        SkinType::Winter,
        SkinType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkinType::Default => "default",
            SkinType::Champion => "champion",
            SkinType::Winter => "winter",
            SkinType::Other => "other",
        }
    }
}

/// Returned when a tier or skin name is not one of the known keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownId {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

fn unknown<T: Copy>(kind: &'static str, value: &str, all: &[T], name: fn(T) -> &'static str) -> UnknownId {
    UnknownId {
        kind,
        value: value.to_string(),
        expected: all.iter().map(|v| name(*v)).collect::<Vec<_>>().join(", "),
    }
}

impl FromStr for ArtifactTier {
    type Err = UnknownId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| unknown("artifact tier", s, &Self::ALL, Self::as_str))
    }
}

impl FromStr for SkinType {
    type Err = UnknownId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| unknown("skin type", s, &Self::ALL, Self::as_str))
    }
}

impl fmt::Display for ArtifactTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One value per artifact tier. Serializes as an object keyed by tier name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerTier<T> {
    pub white: T,
    pub green: T,
    pub blue: T,
    pub violet: T,
    pub orange: T,
}

impl<T> PerTier<T> {
    /// Iterate `(tier, value)` in upgrade order.
    pub fn iter(&self) -> impl Iterator<Item = (ArtifactTier, &T)> {
        ArtifactTier::ALL.into_iter().map(move |t| (t, &self[t]))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(_, v)| v)
    }
}

impl<T> Index<ArtifactTier> for PerTier<T> {
    type Output = T;

    fn index(&self, tier: ArtifactTier) -> &T {
        match tier {
            ArtifactTier::White => &self.white,
            ArtifactTier::Green => &self.green,
            ArtifactTier::Blue => &self.blue,
            ArtifactTier::Violet => &self.violet,
            ArtifactTier::Orange => &self.orange,
        }
    }
}

impl<T> IndexMut<ArtifactTier> for PerTier<T> {
    fn index_mut(&mut self, tier: ArtifactTier) -> &mut T {
        match tier {
            ArtifactTier::White => &mut self.white,
            ArtifactTier::Green => &mut self.green,
            ArtifactTier::Blue => &mut self.blue,
            ArtifactTier::Violet => &mut self.violet,
            ArtifactTier::Orange => &mut self.orange,
        }
    }
}

/// One value per skin type. Serializes as an object keyed by skin type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerSkin<T> {
    pub default: T,
    pub champion: T,
    pub winter: T,
    pub other: T,
}

impl<T> PerSkin<T> {
    pub fn iter(&self) -> impl Iterator<Item = (SkinType, &T)> {
        SkinType::ALL.into_iter().map(move |s| (s, &self[s]))
    }
}

impl<T> Index<SkinType> for PerSkin<T> {
    type Output = T;

    fn index(&self, skin: SkinType) -> &T {
        match skin {
            SkinType::Default => &self.default,
            SkinType::Champion => &self.champion,
            SkinType::Winter => &self.winter,
            SkinType::Other => &self.other,
        }
    }
}

impl<T> IndexMut<SkinType> for PerSkin<T> {
    fn index_mut(&mut self, skin: SkinType) -> &mut T {
        match skin {
            SkinType::Default => &mut self.default,
            SkinType::Champion => &mut self.champion,
            SkinType::Winter => &mut self.winter,
            SkinType::Other => &mut self.other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Violet".parse::<ArtifactTier>(), Ok(ArtifactTier::Violet));
        assert_eq!(" other ".parse::<SkinType>(), Ok(SkinType::Other));
    }

    #[test]
    fn unknown_names_list_expected_keys() {
        let err = "gold".parse::<ArtifactTier>().unwrap_err();
        assert_eq!(err.value, "gold");
        assert_eq!(err.expected, "white, green, blue, violet, orange");
        let err = "summer".parse::<SkinType>().unwrap_err();
        assert!(err.to_string().contains("skin type 'summer'"), "{err}");
    }

    #[test]
    fn per_tier_index_and_order() {
        let mut m = PerTier::<u32>::default();
        m[ArtifactTier::Blue] = 7;
        m[ArtifactTier::Orange] += 2;
        let seen: Vec<_> = m.iter().map(|(t, v)| (t, *v)).collect();
        assert_eq!(seen[0], (ArtifactTier::White, 0));
        assert_eq!(seen[2], (ArtifactTier::Blue, 7));
        assert_eq!(seen[4], (ArtifactTier::Orange, 2));
        assert_eq!(m.values().sum::<u32>(), 9);
    }

    #[test]
    fn per_tier_serializes_by_name() {
        let m = PerTier { white: 1, green: 2, blue: 3, violet: 4, orange: 5 };
        let txt = serde_json::to_string(&m).unwrap();
        assert_eq!(txt, r#"{"white":1,"green":2,"blue":3,"violet":4,"orange":5}"#);
        assert_eq!(ArtifactTier::Violet.to_string(), "violet");
    }
}
