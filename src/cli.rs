// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::{
    config::consts::WORKERS,
    config::options::{OutputFormat, OutputOptions, Region, ScrapeOptions},
    core::net::HttpSource,
    error::Result,
    output,
    progress::LogProgress,
    scrape,
};

/// Generates randomized encounters for each area in a region.
#[derive(Debug, Parser)]
#[command(name = "pokearth_scrape", version, about)]
pub struct Args {
    /// Pokearth region to generate encounters for
    #[arg(value_enum)]
    pub region: Region,

    /// Increase logging verbosity. May be added multiple times.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Seed the random picks for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Area pages fetched in parallel
    #[arg(long, default_value_t = WORKERS)]
    pub workers: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Emit a header row (csv/tsv only)
    #[arg(long)]
    pub headers: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

impl Args {
    pub fn scrape_options(&self) -> ScrapeOptions {
        ScrapeOptions {
            region: self.region,
            workers: self.workers.max(1),
            seed: self.seed,
            ..ScrapeOptions::default()
        }
    }

    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            format: self.format,
            include_headers: self.headers,
            out: self.out.clone(),
        }
    }
}

pub fn run(args: &Args) -> Result<()> {
    crate::log::init(args.verbose);

    let opts = args.scrape_options();
    let source = HttpSource::new()?;
    let mut rng = scrape::rng_for(&opts);
    let mut progress = LogProgress::default();

    let encounters = scrape::collect_encounters(&source, &opts, &mut rng, Some(&mut progress))?;
    if let Some(path) = output::emit(&encounters, &args.output_options())? {
        logf!("Wrote {}", path.display());
    }
    Ok(())
}
