use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::{Command, Stdio};

#[derive(Parser)]
#[command(author, version, about = "Workspace automation tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// fmt, clippy, deny, tests, then the table checks against the built binary
    Ci,
    /// Validate shipped cost tables and configs against the serde models
    SchemaCheck,
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("spawn")?;
    if !status.success() {
        bail!("command failed: {:?}", cmd);
    }
    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    let mut c = Command::new("cargo");
    c.args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    run(&mut c)
}

fn ci() -> Result<()> {
    cargo(&["fmt", "--all", "--check"])?;
    cargo(&["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])?;
    cargo_deny()?;
    cargo(&["test", "--workspace"])?;
    schema_check()?;
    // The shipped binary must load the configured tables end to end.
    cargo(&["run", "-q", "-p", "herodex", "--", "check"])?;
    Ok(())
}

fn cargo_deny() -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.args(["deny", "check"]).stdout(Stdio::inherit()).stderr(Stdio::inherit());
    match cmd.status() {
        Ok(status) if !status.success() => bail!("cargo deny check failed"),
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("xtask: cargo-deny unavailable ({e}); skipping license/advisory check");
            Ok(())
        }
    }
}

fn schema_check() -> Result<()> {
    // Every JSON under data/upgrades must load as one of the two tables, and
    // the on-disk tables must match what the binaries embed.
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..");
    let upgrades = root.join("data/upgrades");
    let mut count = 0usize;
    for entry in std::fs::read_dir(&upgrades)
        .with_context(|| format!("read dir {}", upgrades.display()))?
    {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        match name.as_str() {
            "artifact_upgrade.json" => {
                let table = data_runtime::loader::load_artifact_table(&path)?;
                if table != data_runtime::loader::embedded_artifact_table()? {
                    bail!("{} differs from the embedded artifact table; rebuild", path.display());
                }
            }
            "skin_upgrade.json" => {
                let table = data_runtime::loader::load_skin_table(&path)?;
                if table != data_runtime::loader::embedded_skin_table()? {
                    bail!("{} differs from the embedded skin table; rebuild", path.display());
                }
            }
            other => bail!("unexpected table file: data/upgrades/{other}"),
        }
        count += 1;
    }
    data_runtime::configs::telemetry::load_default().context("validate telemetry.toml")?;
    let tables = data_runtime::configs::tables::load_default().context("validate tables.toml")?;
    data_runtime::UpgradeSpecDb::load(&tables).context("load configured tables")?;
    println!("xtask: schema check ok ({} tables)", count);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Ci => ci(),
        Cmd::SchemaCheck => schema_check(),
    }
}
