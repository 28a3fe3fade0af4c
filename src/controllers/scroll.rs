//! Smooth scrolling for in-page navigation links.

use super::Controller;
use crate::events::{Bindings, EventKind, Handler};
use crate::page::{ElementId, Page};

const NAV_CLASS: &str = "nav-links";

#[derive(Debug, Default)]
/// Intercepts fragment links inside `.nav-links`.
pub struct SmoothScroll;

impl SmoothScroll {
    /// Scrolls to the link's fragment target.
    ///
    /// Returns `true` (default prevented) only when the href is a fragment and the target
    /// exists; otherwise the browser navigates normally.
    pub fn on_click(page: &mut Page, link: ElementId) -> bool {
        let target = page
            .get(link)
            .attr("href")
            .and_then(|href| href.strip_prefix('#'))
            .filter(|fragment| !fragment.is_empty())
            .and_then(|fragment| page.by_id(fragment));
        match target {
            Some(target) => {
                page.scroll_into_view(target);
                true
            }
            None => false,
        }
    }
}

impl Controller for SmoothScroll {
    fn attach(&mut self, page: &Page, bindings: &mut Bindings) {
        for nav in page.select_all(&[NAV_CLASS]) {
            for link in page.select_tag(nav, "a") {
                bindings.bind(link, EventKind::Click, Handler::SmoothScroll);
            }
        }
    }
}
