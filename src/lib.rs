// src/lib.rs
//! Random Nuzlocke encounters from Pokearth.
//!
//! The interesting part is `core`: two event-driven builders that rebuild
//! nested tables and flat option lists from a raw tag/text stream. `specs`
//! picks the area list and encounter table out of that, `scrape` runs it
//! over a whole region.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod progress;
pub mod scrape;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result, StructuralViolation};
