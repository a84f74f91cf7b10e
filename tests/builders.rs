// tests/builders.rs
//
// Builder properties over generated and hand-written markup, driven through
// the real tokenizer.
//
use pokearth_scrape::core::tokenize::{feed, parse_forms, parse_tables};
use pokearth_scrape::core::{Table, TableBuilder};
use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};

const WORDS: [&str; 6] = ["Lechonk", "Hoppip", " ", "Area One", "Lv. 5", "30%"];

/// Render a random table into `html`. Pushes every table it closes into
/// `emitted` (inner tables first) and returns its own rows.
fn gen_table(rng: &mut StdRng, depth: usize, html: &mut String, emitted: &mut Vec<Table>) -> Table {
    let mut table = Table::new();
    html.push_str("<table>");
    for _ in 0..rng.gen_range(0..4) {
        html.push_str("<tr>");
        let mut row = Vec::new();
        for _ in 0..rng.gen_range(0..4) {
            html.push_str("<td>");
            let mut cell = String::new();
            for _ in 0..rng.gen_range(0..4) {
                if depth < 3 && rng.gen_bool(0.2) {
                    gen_table(rng, depth + 1, html, emitted);
                } else {
                    let w = WORDS[rng.gen_range(0..WORDS.len())];
                    html.push_str(w);
                    cell.push_str(w);
                }
            }
            html.push_str("</td>");
            row.push(cell);
        }
        html.push_str("</tr>");
        table.push(row);
    }
    html.push_str("</table>");
    emitted.push(table.clone());
    table
}

#[test]
fn balanced_markup_round_trips() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut html = String::new();
        let mut expected = Vec::new();
        for _ in 0..rng.gen_range(1..4) {
            gen_table(&mut rng, 1, &mut html, &mut expected);
            html.push_str("<p>between</p>");
        }
        assert_eq!(parse_tables(&html), expected, "seed {seed}: {html}");
    }
}

#[test]
fn one_table_out_per_table_in() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(1000 + seed);
        let mut html = String::new();
        let mut expected = Vec::new();
        gen_table(&mut rng, 1, &mut html, &mut expected);
        assert_eq!(parse_tables(&html).len(), html.matches("<table>").count());
    }
}

#[test]
fn only_closers_never_fail_or_underflow() {
    let html = "</table></td></tr></table></td></table></tr>".repeat(20);
    let mut b = TableBuilder::new();
    feed(&html, &mut b).unwrap();
    assert_eq!(b.depth(), 0);
    assert!(b.tables().is_empty());
}

#[test]
fn close_order_not_open_order() {
    // A opens first but closes last; B nested in A closes first.
    let html = "<table><tr><td>A<table><tr><td>B</td></tr></table></td></tr></table>\
                <table><tr><td>C</td></tr></table>";
    let got = parse_tables(html);
    let firsts: Vec<&str> = got.iter().map(|t| t[0][0].as_str()).collect();
    assert_eq!(firsts, vec!["B", "A", "C"]);
}

#[test]
fn real_world_sloppiness() {
    // tbody/th are not tracked; cells still land in their rows.
    let html = r#"
        <table class="dextable">
          <tbody>
            <tr><th>Ignored header</th><td class="fooevo">Filters</td></tr>
            <tr><td>Standard</td><td><a href="/pokedex-sv/lechonk/">Lechonk</a></td></tr>
          </tbody>
        </table>
    "#;
    let got = parse_tables(html);
    assert_eq!(got.len(), 1);
    assert_eq!(got[0][0], vec!["Filters"]);
    assert_eq!(got[0][1], vec!["Standard", "Lechonk"]);
}

#[test]
fn scenario_forms() {
    let html = r#"<form><option value="10">Foo</option><option value="20">Bar</option></form>"#;
    let forms = parse_forms(html).unwrap();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0]["Foo"].as_deref(), Some("10"));
    assert_eq!(forms[0]["Bar"].as_deref(), Some("20"));
    assert_eq!(forms[0].get_index(0).map(|(k, _)| k.as_str()), Some("Foo"));
}

#[test]
fn nested_option_aborts_with_context() {
    let html = "<form><option value=1>A<option value=2>B</option></form>";
    let err = parse_forms(html).unwrap_err();
    assert_eq!(err.tag, "option");
    assert!(err.to_string().contains("<option>"));
}
