//! The footer newsletter sign-up: a single email field checked on submit.

use super::validate::is_valid_email;
use super::{set_status, FormState};
use crate::events::{Bindings, EventKind, Handler};
use crate::page::{ElementId, Page};
use tracing::info;

const FORM_ID: &str = "newsletterForm";
const EMAIL_ID: &str = "email";
const STATUS_CLASS: &str = "nstatus";
const THANKS: &str = "Thanks! Please check your inbox.";
const INVALID: &str = "Enter a valid email.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// The newsletter form's only required field.
pub struct EmailField;

#[derive(Debug, Default)]
/// Newsletter form controller.
pub struct NewsletterForm {
    form: Option<ElementId>,
    email: Option<ElementId>,
    status: Option<ElementId>,
    state: FormState<EmailField>,
    subscribers: Vec<String>,
}

impl NewsletterForm {
    /// Finds the form, its email input and status line inside it.
    pub fn attach(&mut self, page: &Page, bindings: &mut Bindings) {
        let Some(form) = page.by_id(FORM_ID) else {
            return;
        };
        self.form = Some(form);
        self.email = page
            .descendants(form)
            .into_iter()
            .find(|el| page.get(*el).id() == Some(EMAIL_ID));
        self.status = page.select(form, &[STATUS_CLASS]).first().copied();
        bindings.bind(form, EventKind::Submit, Handler::NewsletterSubmit);
    }

    #[must_use]
    /// Current validation state.
    pub fn state(&self) -> &FormState<EmailField> {
        &self.state
    }

    #[must_use]
    /// Addresses accepted during this page session.
    pub fn subscribers(&self) -> &[String] {
        &self.subscribers
    }

    /// Checks the email; shows the outcome and resets only on success.
    pub fn on_submit(&mut self, page: &mut Page) -> bool {
        let email = self
            .email
            .map(|el| page.get(el).value().trim().to_string())
            .unwrap_or_default();
        let ok = is_valid_email(&email);
        set_status(page, self.status, if ok { THANKS } else { INVALID });

        if ok {
            if let Some(el) = self.email {
                page.get_mut(el).set_value("");
            }
            info!(%email, "newsletter sign-up");
            self.subscribers.push(email);
            self.state = FormState::Valid;
        } else {
            self.state = FormState::Invalid([(EmailField, INVALID)].into());
        }
        ok
    }
}
