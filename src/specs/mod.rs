// src/specs/mod.rs
//! # Page "specs"
//!
//! One module per kind of Pokearth page. Each knows *where the ground truth
//! lives* in that page's reconstructed forms/tables and how to pick it out.
//!
//! ## What lives here
//! - Selection over builder output (which form, which table, which rows).
//! - Sentinel checks against fixed labels on the site (`Filters`, `Standard`, …).
//!
//! ## What does **not** live here
//! - Tokenizing / structure reconstruction (`core::tokenize`, `core::tables`,
//!   `core::forms`).
//! - Concurrency, random picks and output (`scrape`, `output`).
//!
//! ## Typical call chain
//! ```text
//! cli::run → scrape::collect_encounters → specs::areas::fetch_areas
//!                                       ↘ specs::encounters::fetch_candidates (per area, workers)
//! ```
//!
//! Everything here is testable offline: the `select_*` / `discover` functions
//! take markup or builder output, the `fetch_*` ones take any `PageSource`.
pub mod areas;
pub mod encounters;
