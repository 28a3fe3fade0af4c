//! Mobile navigation toggle.

use super::Controller;
use crate::events::{Bindings, EventKind, Handler};
use crate::page::{ElementId, Page};

const TOGGLE_ID: &str = "navToggle";
const MENU_CLASS: &str = "nav-links";
const OPEN: &str = "open";

#[derive(Debug, Default)]
/// Keeps `aria-expanded` on the toggle and `open` on the menu in lockstep.
pub struct MobileNav {
    toggle: Option<ElementId>,
    menu: Option<ElementId>,
    expanded: bool,
}

impl MobileNav {
    #[must_use]
    /// Whether the menu is open.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Opens a closed menu or closes an open one.
    pub fn toggle(&mut self, page: &mut Page) -> bool {
        self.expanded = !self.expanded;
        if let Some(toggle) = self.toggle {
            let value = if self.expanded { "true" } else { "false" };
            page.get_mut(toggle).set_attr("aria-expanded", value);
        }
        if let Some(menu) = self.menu {
            page.get_mut(menu).set_class(OPEN, self.expanded);
        }
        self.expanded
    }
}

impl Controller for MobileNav {
    fn attach(&mut self, page: &Page, bindings: &mut Bindings) {
        let Some(toggle) = page.by_id(TOGGLE_ID) else {
            return;
        };
        self.toggle = Some(toggle);
        self.menu = page.select_all(&[MENU_CLASS]).first().copied();
        self.expanded = page.get(toggle).attr("aria-expanded") == Some("true");
        bindings.bind(toggle, EventKind::Click, Handler::ToggleNav);
    }
}
