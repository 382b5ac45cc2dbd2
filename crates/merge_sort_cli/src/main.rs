//! Prints a sequence before and after merge sorting it.

mod cli;
mod sequence;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use merge_sort::Decomposition;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use cli::Cli;
use sequence::{Labeled, SAMPLE};

fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug shows the sort events; logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let strategy: Decomposition = cli.strategy.into();
    let mut values = cli.sequence().unwrap_or_else(|| SAMPLE.to_vec());
    info!(len = values.len(), ?strategy, "sorting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", Labeled { label: "before", values: &values })
        .context("failed to write to stdout")?;
    merge_sort::sort_i64(strategy, &mut values);
    writeln!(out, "{}", Labeled { label: "after", values: &values })
        .context("failed to write to stdout")?;

    Ok(())
}
