//! The appointment booking form.
//!
//! Four required fields, one of which (phone) carries a pattern. A valid submit collects the
//! values into a [`Booking`], logs it, and resets the form. Nothing leaves the page: the
//! collected bookings stand in for the external notification service.

use super::validate::is_valid_phone;
use super::{set_status, show_error, FieldState, FormState};
use crate::events::{Bindings, EventKind, Handler};
use crate::page::{ElementId, Page};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

const FORM_ID: &str = "bookForm";
const STATUS_ID: &str = "formStatus";
const FIX_FIELDS: &str = "Please fix the highlighted fields.";
const CONFIRMED: &str = "Booking confirmed! We'll WhatsApp you shortly.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Required booking fields, in display order.
pub enum BookingField {
    /// Guest name.
    Name,
    /// Mobile number.
    Phone,
    /// Chosen service.
    Service,
    /// Appointment date.
    Date,
}

impl BookingField {
    /// Every field in display order.
    pub const ALL: [BookingField; 4] = [
        BookingField::Name,
        BookingField::Phone,
        BookingField::Service,
        BookingField::Date,
    ];

    #[must_use]
    /// Id of the control on the page.
    pub fn id(self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Phone => "phone",
            BookingField::Service => "service",
            BookingField::Date => "date",
        }
    }

    #[must_use]
    /// Message shown when the field fails validation.
    pub fn message(self) -> &'static str {
        match self {
            BookingField::Name => "Enter your name.",
            BookingField::Phone => "Enter a valid phone number.",
            BookingField::Service => "Choose a service.",
            BookingField::Date => "Pick a date.",
        }
    }

    #[must_use]
    /// Checks a raw value, returning the error message when it fails.
    pub fn validate(self, value: &str) -> Option<&'static str> {
        let value = value.trim();
        let ok = !value.is_empty() && (self != BookingField::Phone || is_valid_phone(value));
        (!ok).then_some(self.message())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Values collected from a valid submit.
pub struct Booking {
    /// Guest name.
    pub name: String,
    /// Mobile number as entered.
    pub phone: String,
    /// Chosen service.
    pub service: String,
    /// Appointment date.
    pub date: String,
}

#[derive(Debug, Default)]
/// Booking form controller and validation state.
pub struct BookingForm {
    form: Option<ElementId>,
    status: Option<ElementId>,
    inputs: BTreeMap<BookingField, ElementId>,
    fields: BTreeMap<BookingField, FieldState>,
    state: FormState<BookingField>,
    submissions: Vec<Booking>,
}

impl BookingForm {
    /// Pairs the form with its controls and attaches input, blur and submit listeners.
    pub fn attach(&mut self, page: &Page, bindings: &mut Bindings) {
        let Some(form) = page.by_id(FORM_ID) else {
            return;
        };
        self.form = Some(form);
        self.status = page.by_id(STATUS_ID);
        bindings.bind(form, EventKind::Submit, Handler::BookingSubmit);

        for field in BookingField::ALL {
            let Some(input) = page.by_id(field.id()) else {
                continue;
            };
            self.inputs.insert(field, input);
            self.fields.entry(field).or_default();
            bindings.bind(input, EventKind::Input, Handler::BookingInput(field));
            bindings.bind(input, EventKind::Blur, Handler::BookingBlur(field));
        }
    }

    #[must_use]
    /// Current validation state.
    pub fn state(&self) -> &FormState<BookingField> {
        &self.state
    }

    #[must_use]
    /// State of one field.
    pub fn field(&self, field: BookingField) -> Option<&FieldState> {
        self.fields.get(&field)
    }

    #[must_use]
    /// Bookings collected during this page session.
    pub fn submissions(&self) -> &[Booking] {
        &self.submissions
    }

    fn read(&mut self, page: &Page, field: BookingField) -> String {
        let value = self
            .inputs
            .get(&field)
            .map(|input| page.get(*input).value().trim().to_string())
            .unwrap_or_default();
        self.fields.entry(field).or_default().value.clone_from(&value);
        value
    }

    fn display(&mut self, page: &mut Page, field: BookingField, message: &str) {
        if let Some(input) = self.inputs.get(&field) {
            show_error(page, *input, message);
        }
        self.fields.entry(field).or_default().error = message.to_string();
    }

    fn settle(&mut self) {
        let errors: BTreeMap<_, _> = self
            .fields
            .iter()
            .filter(|(_, state)| !state.error.is_empty())
            .map(|(field, _)| (*field, field.message()))
            .collect();
        self.state = if errors.is_empty() {
            FormState::Clean
        } else {
            FormState::Invalid(errors)
        };
    }

    /// Typing clears the field's error without re-validating it.
    pub fn on_input(&mut self, page: &mut Page, field: BookingField) {
        self.read(page, field);
        self.display(page, field, "");
        self.settle();
    }

    /// Leaving a field shows its error when the value fails.
    pub fn on_blur(&mut self, page: &mut Page, field: BookingField) {
        let value = self.read(page, field);
        if let Some(message) = field.validate(&value) {
            self.display(page, field, message);
        }
        self.settle();
    }

    /// Validates every field; collects and resets on success.
    ///
    /// Returns the collected booking when the form was valid.
    pub fn on_submit(&mut self, page: &mut Page) -> Option<Booking> {
        let mut errors = BTreeMap::new();
        for field in BookingField::ALL {
            let value = self.read(page, field);
            let message = field.validate(&value);
            self.display(page, field, message.unwrap_or(""));
            if let Some(message) = message {
                errors.insert(field, message);
            }
        }

        if !errors.is_empty() {
            debug!(invalid = errors.len(), "booking rejected");
            set_status(page, self.status, FIX_FIELDS);
            self.state = FormState::Invalid(errors);
            return None;
        }

        let booking = Booking {
            name: self.read(page, BookingField::Name),
            phone: self.read(page, BookingField::Phone),
            service: self.read(page, BookingField::Service),
            date: self.read(page, BookingField::Date),
        };
        set_status(page, self.status, CONFIRMED);
        match serde_json::to_string(&booking) {
            Ok(json) => info!(booking = %json, "booking received"),
            Err(e) => info!(error = %e, "booking received"),
        }
        self.reset(page);
        self.state = FormState::Valid;
        self.submissions.push(booking.clone());
        Some(booking)
    }

    fn reset(&mut self, page: &mut Page) {
        for (field, input) in &self.inputs {
            page.get_mut(*input).set_value("");
            if let Some(state) = self.fields.get_mut(field) {
                state.value.clear();
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/booking.rs"]
mod tests;
