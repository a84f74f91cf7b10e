// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::Result;
use pokearth_scrape::cli::{self, Args};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    cli::run(&args)?;
    Ok(())
}
