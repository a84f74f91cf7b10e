// src/output.rs
use std::{
    borrow::Cow,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::OUTPUT_HEADERS;
use crate::config::options::{OutputFormat, OutputOptions};
use crate::scrape::Encounters;

/// Quote a field for `sep`-separated output, doubling inner quotes.
fn field(value: &str, sep: char) -> Cow<'_, str> {
    if value.contains([sep, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// One `area<sep>species` line.
pub fn write_record<W: Write>(mut w: W, (area, species): (&str, &str), sep: char) -> io::Result<()> {
    writeln!(w, "{}{sep}{}", field(area, sep), field(species, sep))
}

/// Render `encounters` in the requested format.
pub fn write_encounters<W: Write>(
    mut w: W,
    encounters: &Encounters,
    format: OutputFormat,
    include_headers: bool,
) -> io::Result<()> {
    match format.delim() {
        None => {
            for (area, species) in encounters {
                writeln!(w, "{area}: {species}")?;
            }
        }
        Some(sep) => {
            if include_headers {
                write_record(&mut w, OUTPUT_HEADERS, sep)?;
            }
            for (area, species) in encounters {
                write_record(&mut w, (area.as_str(), species.as_str()), sep)?;
            }
        }
    }
    w.flush()
}

pub fn ensure_directory(p: &Path) -> io::Result<()> {
    if p.exists() {
        if p.is_dir() { return Ok(()); }
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", p.display()),
        ));
    }
    fs::create_dir_all(p)
}

/// Write to `opts.out` (creating parent dirs) or to stdout.
/// Returns the file path when one was written.
pub fn emit(encounters: &Encounters, opts: &OutputOptions) -> io::Result<Option<PathBuf>> {
    match &opts.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            let file = BufWriter::new(File::create(path)?);
            write_encounters(file, encounters, opts.format, opts.include_headers)?;
            Ok(Some(path.clone()))
        }
        None => {
            let stdout = io::stdout();
            write_encounters(stdout.lock(), encounters, opts.format, opts.include_headers)?;
            Ok(None)
        }
    }
}
