// src/specs/areas.rs
//! Area discovery for a region.
//!
//! The region landing page carries a handful of jump-menu forms; the one at
//! [`AREA_FORM_INDEX`] lists every area as `<option value="/pokearth/…">Name</option>`.
//! The region's own index page shows up in that list too and is filtered out.

use indexmap::IndexMap;

use crate::config::consts::{AREA_FORM_INDEX, INDEX_STEM};
use crate::config::options::Region;
use crate::core::net::PageSource;
use crate::core::tokenize::parse_forms;
use crate::core::Form;
use crate::error::{Error, Result};

/// Area name → site-relative page reference, in page order.
pub type Areas = IndexMap<String, String>;

/// Last path segment of `value` with its extension removed
/// (`/pokearth/paldea/index.shtml` → `index`). A leading dot is part of the
/// name, not an extension.
pub fn file_stem(value: &str) -> &str {
    let base = value.rsplit('/').next().unwrap_or(value);
    match base.rfind('.') {
        Some(i) if base[..i].chars().any(|c| c != '.') => &base[..i],
        _ => base,
    }
}

/// Keep the options that point at a real area page.
pub fn areas_from_form(form: &Form) -> Areas {
    let mut out = Areas::new();
    for (label, value) in form {
        let Some(value) = value else {
            logd!("Skipping option without a page: '{label}'");
            continue;
        };
        if file_stem(value) == INDEX_STEM {
            logd!("Removing invalid area: '{label}'");
            continue;
        }
        out.insert(label.clone(), value.clone());
    }
    out
}

/// Build the forms of a region page and pull the area list out of it.
pub fn discover(html: &str) -> Result<Areas> {
    let forms = parse_forms(html)?;
    let form = forms.get(AREA_FORM_INDEX).ok_or(Error::AreaFormMissing {
        index: AREA_FORM_INDEX,
        found: forms.len(),
    })?;
    let areas = areas_from_form(form);
    logd!("Found areas: {:?}", areas.keys().collect::<Vec<_>>());
    Ok(areas)
}

pub fn fetch_areas(source: &dyn PageSource, region: Region) -> Result<Areas> {
    let html = source.fetch(&region.url())?;
    discover(&html)
}
