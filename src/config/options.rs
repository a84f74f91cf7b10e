// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Region {
    Paldea,
    // TODO: Kitakami / Blueberry once their region pages expose the same area form
}

impl Region {
    pub fn slug(&self) -> &'static str {
        match self {
            Region::Paldea => "paldea",
        }
    }

    /// Full URL of the region's Pokearth landing page.
    pub fn url(&self) -> String {
        join!(SITE, "/", POKEARTH, "/", self.slug())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// `Area: Encounter` lines
    #[default]
    Text,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn delim(&self) -> Option<char> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Csv => Some(','),
            OutputFormat::Tsv => Some('\t'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub region: Region,
    pub workers: usize,
    pub pause_ms: u64,
    /// Fixed RNG seed for reproducible picks; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            region: Region::Paldea,
            workers: WORKERS,
            pause_ms: REQUEST_PAUSE_MS,
            seed: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub include_headers: bool,
    /// `None` writes to stdout.
    pub out: Option<PathBuf>,
}
