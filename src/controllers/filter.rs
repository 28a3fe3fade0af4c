//! Filter chips over the service cards.
//!
//! Exactly one chip is active. A card is visible when the active token is `all` or appears in
//! the card's class attribute; hidden cards carry the `hidden` attribute.

use super::hover::CARD_CLASSES;
use super::Controller;
use crate::events::{Bindings, EventKind, Handler};
use crate::page::{ElementId, Page};

const CHIP_CLASS: &str = "chip";
const ACTIVE: &str = "active";
const SHOW_ALL: &str = "all";

#[derive(Debug, Default)]
/// Tracks the active chip.
pub struct FilterChips {
    chips: Vec<ElementId>,
    active: Option<ElementId>,
}

impl FilterChips {
    #[must_use]
    /// The active chip, if any chips exist.
    pub fn active(&self) -> Option<ElementId> {
        self.active
    }

    #[must_use]
    /// Filter token of the active chip; `all` when none is active.
    pub fn token<'p>(&self, page: &'p Page) -> &'p str {
        self.active
            .and_then(|chip| page.get(chip).data("filter"))
            .unwrap_or(SHOW_ALL)
    }

    /// Makes `chip` the only active chip and refilters.
    pub fn choose(&mut self, page: &mut Page, chip: ElementId) {
        for other in &self.chips {
            page.get_mut(*other).set_class(ACTIVE, *other == chip);
        }
        self.active = Some(chip);
        self.apply(page);
    }

    /// Shows or hides every service card according to the active token.
    pub fn apply(&self, page: &mut Page) {
        let token = self.token(page).to_string();
        for card in page.select_all(CARD_CLASSES) {
            let element = page.get_mut(card);
            let visible = token == SHOW_ALL || element.class_attr().contains(&token);
            if visible {
                element.remove_attr("hidden");
            } else {
                element.set_attr("hidden", "");
            }
        }
    }
}

impl Controller for FilterChips {
    fn attach(&mut self, page: &Page, bindings: &mut Bindings) {
        self.chips = page
            .select_all(&[CHIP_CLASS])
            .into_iter()
            .filter(|chip| page.get(*chip).data("filter").is_some())
            .collect();
        self.active = self
            .chips
            .iter()
            .copied()
            .find(|chip| page.get(*chip).has_class(ACTIVE))
            .or_else(|| self.chips.first().copied());
        for chip in &self.chips {
            bindings.bind(*chip, EventKind::Click, Handler::ChooseFilter);
        }
    }
}
