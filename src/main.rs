use anyhow::Context;
use clap::Parser;
use sales_analytics::cli::{args::Args, commands};
use std::process;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let runtime =
        tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

    runtime
        .block_on(commands::run(args))
        .context("Pipeline run failed")?;

    Ok(())
}
