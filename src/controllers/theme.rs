//! Light/dark theme switch stored as `data-theme` on the document root.

use super::Controller;
use crate::events::{Bindings, EventKind, Handler};
use crate::page::{ElementId, Page};

const TOGGLE_ID: &str = "themeToggle";
const ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The two page themes.
pub enum Theme {
    /// Light background.
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    #[must_use]
    /// Attribute value for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[must_use]
    /// Glyph shown on the toggle while this theme is active.
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

#[derive(Debug, Default)]
/// Theme toggle controller.
pub struct ThemeToggle {
    toggle: Option<ElementId>,
}

impl ThemeToggle {
    #[must_use]
    /// Theme currently set on the document root.
    pub fn current(page: &Page) -> Theme {
        if page.get(page.root()).attr(ATTRIBUTE) == Some("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Flips the theme and mirrors the result on the toggle's glyph.
    pub fn toggle(&self, page: &mut Page) -> Theme {
        let next = match Self::current(page) {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        let root = page.root();
        page.get_mut(root).set_attr(ATTRIBUTE, next.as_str());
        if let Some(toggle) = self.toggle {
            page.set_text(toggle, next.glyph());
        }
        next
    }
}

impl Controller for ThemeToggle {
    fn attach(&mut self, page: &Page, bindings: &mut Bindings) {
        if let Some(toggle) = page.by_id(TOGGLE_ID) {
            self.toggle = Some(toggle);
            bindings.bind(toggle, EventKind::Click, Handler::ToggleTheme);
        }
    }
}
