//! Hero slider: one visible slide, wrapped navigation and a fixed auto-advance.

use super::Controller;
use crate::events::{Bindings, EventKind, Handler};
use crate::page::{ElementId, Page};

const TRACK_ID: &str = "slides";
const SLIDE_CLASS: &str = "slide";
const NEXT_ID: &str = "nextSlide";
const PREV_ID: &str = "prevSlide";

#[derive(Debug, Default)]
/// Current slide position over the slides found in `#slides`.
pub struct Slider {
    track: Option<ElementId>,
    count: usize,
    index: usize,
}

impl Slider {
    #[must_use]
    /// Index of the visible slide.
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    /// Number of slides found at attach time.
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    /// True when there is nothing to slide.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Shows slide `n`, wrapping in both directions.
    pub fn go_to(&mut self, page: &mut Page, n: i64) {
        let (Some(track), Ok(count)) = (self.track, i64::try_from(self.count)) else {
            return;
        };
        if count == 0 {
            return;
        }
        self.index = usize::try_from(n.rem_euclid(count)).unwrap_or(0);
        let transform = format!("transform: translateX(-{}%)", self.index * 100);
        page.get_mut(track).set_attr("style", &transform);
    }

    /// Advances one slide.
    pub fn next(&mut self, page: &mut Page) {
        let current = i64::try_from(self.index).unwrap_or(0);
        self.go_to(page, current + 1);
    }

    /// Goes back one slide.
    pub fn prev(&mut self, page: &mut Page) {
        let current = i64::try_from(self.index).unwrap_or(0);
        self.go_to(page, current - 1);
    }
}

impl Controller for Slider {
    fn attach(&mut self, page: &Page, bindings: &mut Bindings) {
        let Some(track) = page.by_id(TRACK_ID) else {
            return;
        };
        self.track = Some(track);
        self.count = page.select(track, &[SLIDE_CLASS]).len();

        if let Some(next) = page.by_id(NEXT_ID) {
            bindings.bind(next, EventKind::Click, Handler::NextSlide);
        }
        if let Some(prev) = page.by_id(PREV_ID) {
            bindings.bind(prev, EventKind::Click, Handler::PrevSlide);
        }
    }
}

#[cfg(test)]
#[path = "../tests/slider.rs"]
mod tests;
