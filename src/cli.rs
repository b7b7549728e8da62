//! Command-line surface of the `vector2-equality` binary.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::config::RunConfig;
use crate::scenario::{Outcome, Scenario};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Scenario to run: step2 or step3
    pub scenario: Scenario,

    /// Optional TOML file overriding the generator parameters
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Resolves the config and runs the selected scenario, writing its output
/// to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<Outcome> {
    let config = match &args.config {
        Some(path) => RunConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => RunConfig::default(),
    };
    debug!(?config, "resolved config");

    let outcome = args
        .scenario
        .run(&config, out)
        .with_context(|| format!("running {}", args.scenario))?;
    out.flush()?;

    Ok(outcome)
}
