// src/core/events.rs
//! Closed set of markup events the builders care about.
//!
//! The tokenizer hands us raw `(tag, attrs)` / `(tag)` / `text` notifications.
//! Everything outside `table`/`tr`/`td`/`form`/`option` is dropped right here,
//! so the builders only ever `match` on a fixed set of variants.

/// One structural event, borrowed from the tokenizer's buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event<'a> {
    StartTable,
    StartRow,
    StartCell,
    StartForm,
    StartOption { value: Option<&'a str> },
    EndTable,
    EndRow,
    EndCell,
    EndForm,
    EndOption,
    Text(&'a str),
}

#[derive(Clone, Copy)]
enum Tag {
    Table,
    Row,
    Cell,
    Form,
    Option,
}

impl Tag {
    const NAMES: [(&'static str, Tag); 5] = [
        ("table", Tag::Table),
        ("tr", Tag::Row),
        ("td", Tag::Cell),
        ("form", Tag::Form),
        ("option", Tag::Option),
    ];

    fn parse(name: &str) -> Option<Tag> {
        Self::NAMES
            .iter()
            .find(|(n, _)| name.eq_ignore_ascii_case(n))
            .map(|(_, t)| *t)
    }
}

impl<'a> Event<'a> {
    /// Classify a start tag. `attrs` are `(name, value)` pairs in source order;
    /// only `option` looks at them (first `value` wins).
    pub fn start(name: &str, attrs: &[(&str, &'a str)]) -> Option<Self> {
        let ev = match Tag::parse(name)? {
            Tag::Table => Event::StartTable,
            Tag::Row => Event::StartRow,
            Tag::Cell => Event::StartCell,
            Tag::Form => Event::StartForm,
            Tag::Option => Event::StartOption {
                value: attrs
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case("value"))
                    .map(|(_, v)| *v),
            },
        };
        Some(ev)
    }

    /// Classify an end tag.
    pub fn end(name: &str) -> Option<Self> {
        let ev = match Tag::parse(name)? {
            Tag::Table => Event::EndTable,
            Tag::Row => Event::EndRow,
            Tag::Cell => Event::EndCell,
            Tag::Form => Event::EndForm,
            Tag::Option => Event::EndOption,
        };
        Some(ev)
    }
}

/// A consumer of the event stream.
///
/// Implementors only write [`EventSink::handle`]; the provided methods are the
/// raw three-call contract the tokenizer adapter drives.
pub trait EventSink {
    type Error;

    fn handle(&mut self, event: Event<'_>) -> Result<(), Self::Error>;

    fn start_tag(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), Self::Error> {
        match Event::start(name, attrs) {
            Some(ev) => self.handle(ev),
            None => Ok(()),
        }
    }

    fn end_tag(&mut self, name: &str) -> Result<(), Self::Error> {
        match Event::end(name) {
            Some(ev) => self.handle(ev),
            None => Ok(()),
        }
    }

    fn text(&mut self, chunk: &str) -> Result<(), Self::Error> {
        self.handle(Event::Text(chunk))
    }
}
