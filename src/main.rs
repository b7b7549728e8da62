use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{prelude::*, EnvFilter};

use vector2_equality::cli::{self, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries only scenario output
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let stdout = io::stdout();
    cli::run(&args, &mut stdout.lock())?;

    Ok(())
}
