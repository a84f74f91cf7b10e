// src/core/forms.rs
//! Rebuilds flat `<form>` → `<option>` listings as ordered `label → value` maps.
//!
//! Unlike the table builder this one is strict: forms on the site are never
//! nested, so a second `<form>` (or `<option>`) while one is open is reported
//! as a [`StructuralViolation`] instead of being guessed at.

use indexmap::IndexMap;

use super::events::{Event, EventSink};
use crate::error::StructuralViolation;

/// Option label → `value` attribute (if the option had one), in source order.
pub type Form = IndexMap<String, Option<String>>;

#[derive(Debug, Default)]
struct PendingOption {
    label: String,
    value: Option<String>,
}

#[derive(Debug, Default)]
pub struct FormBuilder {
    form: Option<Form>,
    option: Option<PendingOption>,
    forms: Vec<Form>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed forms, in close order.
    pub fn forms(&self) -> &[Form] {
        &self.forms
    }

    pub fn into_forms(self) -> Vec<Form> {
        self.forms
    }

    /// Open elements right now: 0, 1 inside a form, 2 inside its option.
    fn depth(&self) -> usize {
        usize::from(self.form.is_some()) + usize::from(self.option.is_some())
    }

    fn violation(&self, tag: &'static str) -> StructuralViolation {
        StructuralViolation { tag, depth: self.depth() + 1 }
    }

    fn apply(&mut self, event: Event<'_>) -> Result<(), StructuralViolation> {
        match event {
            Event::StartForm => {
                if self.form.is_some() {
                    return Err(self.violation("form"));
                }
                self.form = Some(Form::new());
            }
            Event::EndForm => {
                if let Some(form) = self.form.take() {
                    if let Some(dangling) = self.option.take() {
                        logd!("form closed with <option> {:?} still open, dropped", dangling.label);
                    }
                    self.forms.push(form);
                }
            }

            Event::StartOption { value } => {
                if self.option.is_some() {
                    return Err(self.violation("option"));
                }
                self.option = Some(PendingOption {
                    label: s!(),
                    value: value.map(String::from),
                });
            }
            Event::EndOption => {
                let Some(PendingOption { label, value }) = self.option.take() else {
                    return Ok(());
                };
                match self.form.as_mut() {
                    // Repeated labels keep their first position, last value wins.
                    Some(form) => {
                        form.insert(label, value);
                    }
                    None => logd!("<option> {label:?} outside any form, ignored"),
                }
            }

            Event::Text(chunk) => {
                if let Some(opt) = self.option.as_mut() {
                    opt.label.push_str(chunk);
                }
            }

            Event::StartTable
            | Event::EndTable
            | Event::StartRow
            | Event::EndRow
            | Event::StartCell
            | Event::EndCell => {}
        }
        Ok(())
    }
}

impl EventSink for FormBuilder {
    type Error = StructuralViolation;

    fn handle(&mut self, event: Event<'_>) -> Result<(), StructuralViolation> {
        self.apply(event)
    }
}
