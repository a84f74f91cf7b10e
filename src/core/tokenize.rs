// src/core/tokenize.rs
// Drives the html5ever tokenizer (no tree builder) and forwards tags/text to an
// EventSink. The tokenizer decodes entities and lowercases tag names; it does
// not balance anything, which is exactly what the builders expect.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

use super::events::EventSink;
use super::forms::{Form, FormBuilder};
use super::tables::{Table, TableBuilder};
use crate::error::StructuralViolation;

/// html5ever-facing shim. Holds the first sink error; everything after it is
/// dropped because the tokenizer itself cannot be stopped from a sink.
struct Forward<'s, S: EventSink> {
    sink: &'s mut S,
    error: Option<S::Error>,
}

impl<S: EventSink> Forward<'_, S> {
    fn tag(&mut self, tag: &Tag) -> Result<(), S::Error> {
        match tag.kind {
            TagKind::StartTag => {
                let attrs: Vec<(&str, &str)> = tag
                    .attrs
                    .iter()
                    .map(|a| (&*a.name.local, &*a.value))
                    .collect();
                self.sink.start_tag(&tag.name, &attrs)?;
                // `<td/>` counts as an open immediately followed by a close
                if tag.self_closing {
                    self.sink.end_tag(&tag.name)?;
                }
                Ok(())
            }
            TagKind::EndTag => self.sink.end_tag(&tag.name),
        }
    }
}

impl<S: EventSink> TokenSink for Forward<'_, S> {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line: u64) -> TokenSinkResult<()> {
        if self.error.is_some() {
            return TokenSinkResult::Continue;
        }

        let (res, next) = match token {
            Token::TagToken(tag) => {
                // Script/style bodies are raw text, not markup.
                let next = match (&tag.kind, &*tag.name) {
                    (TagKind::StartTag, "script") if !tag.self_closing => {
                        TokenSinkResult::RawData(RawKind::ScriptData)
                    }
                    (TagKind::StartTag, "style") if !tag.self_closing => {
                        TokenSinkResult::RawData(RawKind::Rawtext)
                    }
                    _ => TokenSinkResult::Continue,
                };
                (self.tag(&tag), next)
            }
            Token::CharacterTokens(text) => (self.sink.text(&text), TokenSinkResult::Continue),
            Token::NullCharacterToken => (self.sink.text("\0"), TokenSinkResult::Continue),
            _ => (Ok(()), TokenSinkResult::Continue),
        };

        if let Err(e) = res {
            self.error = Some(e);
        }
        next
    }
}

/// Feed a whole document through `sink`. Returns the first error the sink
/// raised, if any; the sink keeps whatever it built up to that point.
pub fn feed<S: EventSink>(html: &str, sink: &mut S) -> Result<(), S::Error> {
    let mut queue = BufferQueue::new();
    queue.push_back(StrTendril::from_slice(html));

    let mut tok = Tokenizer::new(
        Forward { sink, error: None },
        TokenizerOpts::default(),
    );
    let _ = tok.feed(&mut queue);
    tok.end();

    match tok.sink.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// All tables in `html`, in close order (inner tables before their parents).
pub fn parse_tables(html: &str) -> Vec<Table> {
    let mut builder = TableBuilder::new();
    match feed(html, &mut builder) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    builder.into_tables()
}

/// All forms in `html`, in document order.
pub fn parse_forms(html: &str) -> Result<Vec<Form>, StructuralViolation> {
    let mut builder = FormBuilder::new();
    feed(html, &mut builder)?;
    Ok(builder.into_forms())
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
    fn flat_table() {
        let html = "<table><tr><td>A</td><td>B</td></tr></table>";
        assert_eq!(parse_tables(html), vec![t(&[&["A", "B"]])]);
    }

    #[test]
    fn nested_table_comes_out_first() {
        let html = "<table><tr><td>X<table><tr><td>Y</td></tr></table>Z</td></tr></table>";
        assert_eq!(parse_tables(html), vec![t(&[&["Y"]]), t(&[&["XZ"]])]);
    }

    #[test]
    fn stray_closers_before_a_table() {
        let html = "</td></tr></table><table><tr><td>A</td></tr></table>";
        assert_eq!(parse_tables(html), vec![t(&[&["A"]])]);
    }

    #[test]
    fn form_with_two_options() {
        let html = r#"<form><option value="10">Foo</option><option value="20">Bar</option></form>"#;
        let forms = parse_forms(html).unwrap();
        assert_eq!(forms.len(), 1);
        let pairs: Vec<(&str, Option<&str>)> = forms[0]
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
            .collect();
        assert_eq!(pairs, vec![("Foo", Some("10")), ("Bar", Some("20"))]);
    }

    #[test]
    fn nested_form_surfaces_violation() {
        let html = "<form><form></form></form>";
        let err = parse_forms(html).unwrap_err();
        assert_eq!(err.tag, "form");
    }

    #[test]
    fn uppercase_tags_entities_and_inline_markup() {
        let html = "<TABLE><TR><TD>Mr. <b>Mime</b> &amp; Co</TD></TR></TABLE>";
        assert_eq!(parse_tables(html), vec![t(&[&["Mr. Mime & Co"]])]);
    }

    #[test]
    fn option_label_drops_markup_and_keeps_text() {
        let html = r#"<form><select><option value="/p/a.shtml">South <i>Province</i></option></select></form>"#;
        let forms = parse_forms(html).unwrap();
        assert_eq!(forms[0]["South Province"].as_deref(), Some("/p/a.shtml"));
    }

    #[test]
    fn self_closing_cell_is_empty() {
        let html = "<table><tr><td/><td>B</td></tr></table>";
        assert_eq!(parse_tables(html), vec![t(&[&["", "B"]])]);
    }

    #[test]
    fn script_bodies_are_not_markup() {
        let html = r#"<script>var s = "</table><table><tr><td>bogus</td></tr>";</script>
            <table><tr><td>real</td></tr></table>"#;
        assert_eq!(parse_tables(html), vec![t(&[&["real"]])]);
    }

    #[test]
    fn comments_are_dropped() {
        let html = "<!-- <table><tr><td>x</td></tr></table> --><table><tr><td>y<!-- z --></td></tr></table>";
        assert_eq!(parse_tables(html), vec![t(&[&["y"]])]);
    }

    #[test]
    fn nothing_reaches_the_sink_after_its_first_error() {
        // without the cut-off the outer </form> would complete a form
        let html = r#"<form><form></form><option value="1">A</option></form>"#;
        let mut builder = FormBuilder::new();
        let err = feed(html, &mut builder).unwrap_err();
        assert_eq!(err.tag, "form");
        assert!(builder.forms().is_empty());
    }

    #[test]
    fn garbage_input_does_not_panic() {
        let html = "<<td></tr <table <tr>><td>x</td></table></table></table>&bogus;";
        let _ = parse_tables(html);
        let _ = parse_forms(html);
    }
}
