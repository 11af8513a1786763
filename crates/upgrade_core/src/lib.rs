//! upgrade_core: artifact and skin upgrade cost calculators.
//!
//! Scope
//! - Pure functions over the immutable tables from `data_runtime`.
//! - One error kind (`CalcError::InvalidArgument`) for bad level input; a call
//!   either returns a full result or that error.
//!
//! Extending
//! - New calculators take `&Table` plus a `LevelArg` and reuse `chests_for`
//!   so every conversion rounds up the same way.

pub mod artifact;
pub mod chests;
pub mod error;
pub mod level;
pub mod plan;
pub mod skin;

pub use artifact::{ArtifactUpgrade, calculate_artifact_upgrade};
pub use chests::chests_for;
pub use error::CalcError;
pub use level::LevelArg;
pub use plan::{SkinPlan, SkinPlanEntry, plan_skins};
pub use skin::{SkinUpgrade, SkinUpgradeOptions, calculate_skin_upgrade, other_skin_names};
