// src/config/consts.rs

// Net config
pub const SITE: &str = "https://www.serebii.net";
pub const POKEARTH: &str = "pokearth";
pub const USER_AGENT: &str = concat!("pokearth_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;

// Area discovery: the region page carries several jump-menu forms,
// the fourth one lists the areas.
pub const AREA_FORM_INDEX: usize = 3;
pub const INDEX_STEM: &str = "index";

// Encounter table sentinels
pub const FILTERS_LABEL: &str = "Filters";
pub const STANDARD_LABEL: &str = "Standard";
pub const EXCLUDED_PHRASES: [&str; 2] = ["Standard Spawns", "Fixed Encounters"];

// Output
pub const OUTPUT_HEADERS: (&str, &str) = ("Area", "Encounter");

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
