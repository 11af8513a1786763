use clap::Parser;
use data_runtime::UpgradeSpecDb;
use data_runtime::configs::{tables, telemetry as telemetry_cfg};
use herodex::{cli, telemetry};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: cli::Cli) -> anyhow::Result<()> {
    let tcfg = telemetry_cfg::load_default()?;
    telemetry::init_telemetry(&tcfg)?;
    // Tables load and validate before any command runs.
    let db = UpgradeSpecDb::load_shared(&tables::load_default()?)?;
    let mut out = std::io::stdout().lock();
    cli::execute(&args.cmd, db, &mut out)
}
