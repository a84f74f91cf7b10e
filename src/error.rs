// src/error.rs
//! Error taxonomy.
//!
//! Only two things are ever surfaced to a caller: a form shape the form builder
//! refuses to handle ([`StructuralViolation`]) and failures of the collaborators
//! around the builders (fetching, missing area form, output IO). Malformed table
//! markup is absorbed by the table builder and never shows up here.

use thiserror::Error;

/// Unsupported form shape. Aborts the parse it was raised from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("nested <{tag}> is not supported (would be {depth} deep)")]
pub struct StructuralViolation {
    /// Tag that was opened while another of the same kind was still open.
    pub tag: &'static str,
    /// Element depth (`<form>` = 1, its `<option>` = 2) the offending start
    /// tag would have opened at.
    pub depth: usize,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("fetching {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed page structure: {0}")]
    Structure(#[from] StructuralViolation),

    #[error("area list form #{index} not found on region page ({found} forms present)")]
    AreaFormMissing { index: usize, found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
