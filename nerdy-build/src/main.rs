//! CLI entrypoint for `nerdy-build`: load configuration, run the selected
//! tool, exit with its status.

use std::process::ExitCode;

use clap::Parser;

use nerdy_build::cli::Args;
use nerdy_build::{BuildConfig, BuildError, ExitStatus, SystemInvoker, logging};

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    logging::init();
    let args = Args::parse();
    let status = run(&args).map_err(color_eyre::eyre::Report::from)?;
    Ok(ExitCode::from(status))
}

fn run(args: &Args) -> Result<ExitStatus, BuildError> {
    let orchestrator = BuildConfig::load()?.into_orchestrator()?;
    orchestrator.run(&args.raw, &SystemInvoker)
}
