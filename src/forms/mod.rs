//! Client-side validation for the booking and newsletter forms.
//!
//! Each form is a small state machine over its required fields. Errors are shown on blur or
//! submit and cleared eagerly on input; they are never re-validated while the user types.

pub mod booking;
pub mod newsletter;
pub mod validate;

use crate::markup::Tag;
use crate::page::{ElementId, Page};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Per-field state: the trimmed value last read and the message on display.
pub struct FieldState {
    /// Trimmed current value.
    pub value: String,
    /// Displayed error; empty means valid.
    pub error: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Lifecycle of a form between page load and the next successful submit.
pub enum FormState<F: Ord> {
    /// No errors on display and nothing submitted yet.
    Clean,
    /// At least one field shows an error.
    Invalid(BTreeMap<F, &'static str>),
    /// The last submit passed validation.
    Valid,
}

impl<F: Ord> Default for FormState<F> {
    fn default() -> Self {
        FormState::Clean
    }
}

impl<F: Ord> FormState<F> {
    #[must_use]
    /// Whether the form currently shows errors.
    pub fn is_invalid(&self) -> bool {
        matches!(self, FormState::Invalid(_))
    }
}

/// Writes `message` into the `.error` element following `input`, creating it when missing.
pub(crate) fn show_error(page: &mut Page, input: ElementId, message: &str) {
    let existing = page
        .next_element_sibling(input)
        .filter(|sibling| page.get(*sibling).has_class("error"));
    let slot = existing.or_else(|| page.insert_after(input, &Tag::new("div").class("error")));
    if let Some(slot) = slot {
        page.set_text(slot, message);
    }
}

/// Sets the status line text when the form has one.
pub(crate) fn set_status(page: &mut Page, status: Option<ElementId>, message: &str) {
    if let Some(status) = status {
        page.set_text(status, message);
    }
}
