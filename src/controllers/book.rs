//! "Book" buttons on service cards: preselect the service and jump to the booking form.

use super::Controller;
use crate::events::{Bindings, EventKind, Handler};
use crate::page::{ElementId, Page};

/// Class of a card's book button.
pub const BUTTON_CLASS: &str = "book-btn";
const SERVICE_ID: &str = "service";
const BOOKING_ID: &str = "booking";

#[derive(Debug, Default)]
/// Book button controller.
pub struct BookButtons;

impl BookButtons {
    /// Binds clicks on exactly the given buttons.
    pub fn attach_to(buttons: &[ElementId], bindings: &mut Bindings) {
        for button in buttons {
            bindings.bind(*button, EventKind::Click, Handler::BookService);
        }
    }

    /// Copies the button's `data-service` into the service picker and scrolls to booking.
    pub fn on_click(page: &mut Page, button: ElementId) {
        let service = page
            .get(button)
            .data("service")
            .unwrap_or_default()
            .to_string();
        if !service.is_empty() {
            if let Some(select) = page.by_id(SERVICE_ID) {
                page.get_mut(select).set_value(&service);
            }
        }
        if let Some(section) = page.by_id(BOOKING_ID) {
            page.scroll_into_view(section);
        }
    }
}

impl Controller for BookButtons {
    fn attach(&mut self, page: &Page, bindings: &mut Bindings) {
        Self::attach_to(&page.select_all(&[BUTTON_CLASS]), bindings);
    }
}
