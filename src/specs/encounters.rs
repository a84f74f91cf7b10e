// src/specs/encounters.rs
//! Encounter table selection on an area page.
//!
//! An area page has many tables (navigation, type charts, one per nested
//! sprite cell, …). The wild encounter table is recognised by its first two
//! rows: a `Filters` header row, then a `Standard` row. Its third row must not
//! be one of the section headers used for overworld spawns or fixed encounters;
//! those tables list things you cannot roll for.

use crate::config::consts::{EXCLUDED_PHRASES, FILTERS_LABEL, SITE, STANDARD_LABEL};
use crate::core::net::{PageSource, page_url};
use crate::core::tokenize::parse_tables;
use crate::core::{Row, Table};
use crate::error::Result;

fn first_cell(row: &Row) -> Option<&str> {
    row.first().map(String::as_str)
}

/// Does `table` look like the wild encounter table?
pub fn is_encounter_table(table: &Table) -> bool {
    if table.len() < 3 {
        return false;
    }
    if first_cell(&table[0]) != Some(FILTERS_LABEL) {
        return false;
    }
    if first_cell(&table[1]) != Some(STANDARD_LABEL) {
        return false;
    }
    !table[2]
        .iter()
        .any(|cell| EXCLUDED_PHRASES.contains(&cell.as_str()))
}

/// Depth-1 list of every cell in `rows`, row by row.
pub fn flatten(rows: &[Row]) -> Vec<String> {
    rows.iter().flatten().cloned().collect()
}

/// Candidate species from the first matching table, or nothing if the area
/// has no wild encounters.
pub fn select_candidates(tables: &[Table]) -> Vec<String> {
    match tables.iter().find(|t| is_encounter_table(t)) {
        Some(table) => {
            logd!("Found encounter table");
            flatten(&table[2..])
        }
        None => {
            logd!("No encounter table found");
            Vec::new()
        }
    }
}

pub fn fetch_candidates(source: &dyn PageSource, area_page: &str) -> Result<Vec<String>> {
    let url = page_url(SITE, area_page);
    logd!("Looking up possible encounters on: {url}");
    let html = source.fetch(&url)?;
    Ok(select_candidates(&parse_tables(&html)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn t(rows: &[&[&str]]) -> Table {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn picks_rows_from_third_on() {
        let tables = vec![
            t(&[&["Nav", "Links"]]),
            t(&[&["Filters"], &["Standard", "x"], &["Lechonk", "Tarountula"], &["Hoppip"]]),
        ];
        assert_eq!(select_candidates(&tables), vec!["Lechonk", "Tarountula", "Hoppip"]);
    }

    #[test]
    fn first_match_wins() {
        let tables = vec![
            t(&[&["Filters"], &["Standard"], &["A"]]),
            t(&[&["Filters"], &["Standard"], &["B"]]),
        ];
        assert_eq!(select_candidates(&tables), vec!["A"]);
    }

    #[test]
    fn excluded_sections_are_skipped() {
        let tables = vec![
            t(&[&["Filters"], &["Standard"], &["Standard Spawns"], &["Pawmi"]]),
            t(&[&["Filters"], &["Standard"], &["Ting-Lu", "Fixed Encounters"]]),
            t(&[&["Filters"], &["Standard"], &["Fletchling"]]),
        ];
        assert_eq!(select_candidates(&tables), vec!["Fletchling"]);
    }

    #[test]
    fn short_or_mislabelled_tables_do_not_match() {
        assert!(!is_encounter_table(&t(&[&["Filters"], &["Standard"]])));
        assert!(!is_encounter_table(&t(&[&["Filter"], &["Standard"], &["A"]])));
        assert!(!is_encounter_table(&t(&[&["Filters"], &[], &["A"]])));
        assert!(!is_encounter_table(&t(&[&[], &["Standard"], &["A"]])));
        assert!(is_encounter_table(&t(&[&["Filters"], &["Standard"], &[]])));
    }

    #[test]
    fn no_match_means_no_candidates() {
        assert!(select_candidates(&[]).is_empty());
        assert!(select_candidates(&[t(&[&["a"], &["b"], &["c"]])]).is_empty());
    }

    #[test]
    fn flatten_keeps_row_order() {
        let rows = t(&[&["a", "b"], &[], &["c"]]);
        assert_eq!(flatten(&rows), vec!["a", "b", "c"]);
    }
}
