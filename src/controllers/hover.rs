//! Hover highlighting for service cards.

use super::Controller;
use crate::events::{Bindings, EventKind, Handler};
use crate::page::{ElementId, Page};

/// Classes identifying a service card.
pub const CARD_CLASSES: &[&str] = &["card", "service"];
const HOVERED: &str = "hovered";

#[derive(Debug, Default)]
/// Adds `hovered` while the pointer is over a card.
pub struct Hover;

impl Hover {
    /// Binds enter/leave on exactly the given cards.
    pub fn attach_to(cards: &[ElementId], bindings: &mut Bindings) {
        for card in cards {
            bindings.bind(*card, EventKind::PointerEnter, Handler::HoverOn);
            bindings.bind(*card, EventKind::PointerLeave, Handler::HoverOff);
        }
    }

    /// Pointer entered or left `card`.
    pub fn set(page: &mut Page, card: ElementId, hovered: bool) {
        page.get_mut(card).set_class(HOVERED, hovered);
    }
}

impl Controller for Hover {
    fn attach(&mut self, page: &Page, bindings: &mut Bindings) {
        Self::attach_to(&page.select_all(CARD_CLASSES), bindings);
    }
}
