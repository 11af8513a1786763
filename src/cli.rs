//! `herodex` command line: artifact and skin upgrade planning.
//!
//! Commands write to any `io::Write` so tests can capture output.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use data_runtime::{ArtifactTier, SkinType, UpgradeSpecDb};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use upgrade_core::{
    ArtifactUpgrade, SkinPlan, SkinPlanEntry, SkinUpgrade, SkinUpgradeOptions,
    calculate_artifact_upgrade, calculate_skin_upgrade, other_skin_names, plan_skins,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Hero artifact and skin upgrade planner", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Components and chests to take an artifact from LEVEL to 100
    Artifact {
        #[arg(allow_negative_numbers = true)]
        level: f64,
        #[arg(long)]
        json: bool,
    },
    /// Skin stones and chests to take a skin from LEVEL to 60
    Skin {
        /// default | champion | winter | other
        skin: SkinType,
        #[arg(allow_negative_numbers = true)]
        level: f64,
        /// At level 0, include the one-time unlock cost of an "other" skin
        #[arg(long)]
        unlock: bool,
        #[arg(long)]
        json: bool,
    },
    /// List "other" skin names
    Skins {
        #[arg(long)]
        json: bool,
    },
    /// Total stones for a JSON list of {skin, level, include_unlock_cost}
    Plan {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Load and validate the cost tables
    Check,
}

pub fn execute(cmd: &Cmd, db: &UpgradeSpecDb, out: &mut impl Write) -> Result<()> {
    match cmd {
        Cmd::Artifact { level, json } => {
            let r = calculate_artifact_upgrade(&db.artifact, *level)?;
            tracing::debug!(target: "calc", level, total_chests = r.total_chests, "artifact upgrade");
            if *json {
                write_json(out, &r)
            } else {
                // Level is a validated integer in 1..=100 here.
                let current = *level as u32;
                write_artifact(out, current, db.artifact.tier_of_level(current), &r)
            }
        }
        Cmd::Skin {
            skin,
            level,
            unlock,
            json,
        } => {
            let options = SkinUpgradeOptions {
                include_unlock_cost: *unlock,
            };
            let r = calculate_skin_upgrade(&db.skin, *skin, *level, options)?;
            tracing::debug!(target: "calc", %skin, level, stones = r.stones, "skin upgrade");
            if *json {
                write_json(out, &r)
            } else {
                write_skin(out, &r)
            }
        }
        Cmd::Skins { json } => {
            let names = other_skin_names(&db.skin);
            if *json {
                return write_json(out, &names);
            }
            for name in names {
                writeln!(out, "{name}")?;
            }
            Ok(())
        }
        Cmd::Plan { file, json } => {
            let txt = std::fs::read_to_string(file)
                .with_context(|| format!("read {}", file.display()))?;
            let entries: Vec<SkinPlanEntry> = serde_json::from_str(&txt)
                .with_context(|| format!("parse plan {}", file.display()))?;
            let plan = plan_skins(&db.skin, &entries)?;
            tracing::debug!(target: "calc", entries = entries.len(), stones = plan.total.stones, "skin plan");
            if *json {
                write_json(out, &plan)
            } else {
                write_plan(out, &entries, &plan)
            }
        }
        Cmd::Check => write_check(out, db),
    }
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("encode json")?;
    writeln!(out)?;
    Ok(())
}

fn write_artifact(
    out: &mut impl Write,
    current: u32,
    owner: Option<ArtifactTier>,
    r: &ArtifactUpgrade,
) -> Result<()> {
    if r.is_maxed() {
        writeln!(out, "artifact is at max level")?;
        return Ok(());
    }
    if let Some(tier) = owner {
        writeln!(out, "level {current} ({tier})")?;
    }
    writeln!(out, "{:<8}{:>12}{:>8}", "tier", "components", "chests")?;
    for tier in ArtifactTier::ALL {
        writeln!(
            out,
            "{:<8}{:>12}{:>8}",
            tier, r.components[tier], r.chests[tier]
        )?;
    }
    writeln!(out, "total chests: {}", r.total_chests)?;
    Ok(())
}

fn write_skin(out: &mut impl Write, r: &SkinUpgrade) -> Result<()> {
    writeln!(out, "stones:       {}", r.stones)?;
    writeln!(out, "small chests: {}", r.small_chests)?;
    writeln!(out, "large chests: {}", r.large_chests)?;
    Ok(())
}

fn write_plan(out: &mut impl Write, entries: &[SkinPlanEntry], plan: &SkinPlan) -> Result<()> {
    for (e, r) in entries.iter().zip(&plan.entries) {
        writeln!(out, "{:<10} lvl {:>2}  {:>6} stones", e.skin, e.level, r.stones)?;
    }
    writeln!(out, "total:")?;
    write_skin(out, &plan.total)
}

fn write_check(out: &mut impl Write, db: &UpgradeSpecDb) -> Result<()> {
    for (tier, spec) in db.artifact.tiers().iter() {
        writeln!(
            out,
            "artifact {:<7} levels {:>3}..={:<3} yield {}",
            tier, spec.levels.start, spec.levels.end, spec.chest_yield
        )?;
    }
    for (skin, spec) in db.skin.skins().iter() {
        writeln!(
            out,
            "skin {:<9} {:<14} {} costs",
            skin,
            spec.name,
            spec.costs.len()
        )?;
    }
    writeln!(out, "other skins: {}", db.skin.other_skin_names().len())?;
    writeln!(out, "ok")?;
    Ok(())
}
