//! Page loader overlay and the footer year stamp.

use super::Controller;
use crate::events::{Bindings, EventKind, Handler};
use crate::page::{ElementId, Page};
use chrono::Datelike;

const LOADER_ID: &str = "page-loader";
const YEAR_ID: &str = "year";

/// Delay before the loader starts fading once the window has loaded.
pub const HIDE_AFTER_MS: u64 = 350;
/// Delay before the loader is removed from the document.
pub const REMOVE_AFTER_MS: u64 = 900;

#[derive(Debug, Default)]
/// Loader overlay controller.
pub struct Loader {
    overlay: Option<ElementId>,
}

impl Loader {
    #[must_use]
    /// Whether a loader exists to be dismissed.
    pub fn is_present(&self) -> bool {
        self.overlay.is_some()
    }

    /// Starts the fade-out.
    pub fn hide(&self, page: &mut Page) {
        if let Some(overlay) = self.overlay {
            page.get_mut(overlay).add_class("hide");
        }
    }

    /// Takes the overlay out of the document.
    pub fn remove(&mut self, page: &mut Page) {
        if let Some(overlay) = self.overlay.take() {
            page.remove(overlay);
        }
    }
}

impl Controller for Loader {
    fn attach(&mut self, page: &Page, bindings: &mut Bindings) {
        self.overlay = page.by_id(LOADER_ID);
        bindings.bind(page.root(), EventKind::Load, Handler::PageLoaded);
    }
}

/// Writes the current year into `#year`.
pub fn stamp_year(page: &mut Page) {
    if let Some(year) = page.by_id(YEAR_ID) {
        page.set_text(year, &chrono::Local::now().year().to_string());
    }
}
