use std::io::{self, Write};

use anyhow::{Context, Result};
use hiquad::{run, RunConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = RunConfig::default();
    let report = run(&config)
        .with_context(|| format!("integration at {} digits failed", config.digits))?;

    let mut out = io::stdout().lock();
    report
        .write_to(&mut out)
        .and_then(|()| out.flush())
        .context("failed to write results")?;
    Ok(())
}
