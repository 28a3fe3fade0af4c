//! The page session bridging rendered content and the interaction controllers.
//!
//! A page session goes through three phases. [`AppState::boot`] attaches listeners to the
//! static markup and starts the slider. [`AppState::hydrate`] fetches and renders the content
//! document, then attaches listeners to whatever the render injected. From then on events are
//! fed through [`AppState::dispatch`] and time through [`AppState::advance`], one at a time.

use crate::config::Config;
use crate::controllers::book::BookButtons;
use crate::controllers::filter::FilterChips;
use crate::controllers::hover::Hover;
use crate::controllers::loader::{self, Loader, HIDE_AFTER_MS, REMOVE_AFTER_MS};
use crate::controllers::nav::MobileNav;
use crate::controllers::scroll::SmoothScroll;
use crate::controllers::slider::Slider;
use crate::controllers::theme::ThemeToggle;
use crate::controllers::Controller;
use crate::events::{Bindings, Event, Handler, Outcome};
use crate::forms::booking::BookingForm;
use crate::forms::newsletter::NewsletterForm;
use crate::formats::markdown::MarkdownFormat;
use crate::formats::{Format, Passthrough};
use crate::page::{ElementId, Page};
use crate::render::{RenderOutput, Renderer};
use crate::source::ContentSource;
use crate::timers::{TimerTask, Timers};
use tracing::debug;

/// Single source of truth for one page session.
pub struct AppState {
    /// The live document.
    pub page: Page,
    /// Listener table.
    pub bindings: Bindings,
    /// Hero slider.
    pub slider: Slider,
    /// Theme toggle.
    pub theme: ThemeToggle,
    /// Nav link scrolling.
    pub scroll: SmoothScroll,
    /// Service card hover.
    pub hover: Hover,
    /// Service card book buttons.
    pub book: BookButtons,
    /// Service filter chips.
    pub filters: FilterChips,
    /// Mobile navigation.
    pub nav: MobileNav,
    /// Loader overlay.
    pub loader: Loader,
    /// Booking form.
    pub booking: BookingForm,
    /// Newsletter form.
    pub newsletter: NewsletterForm,
    /// Page clock.
    pub timers: Timers,
    renderer: Renderer,
    slide_interval_ms: u64,
}

impl AppState {
    #[must_use]
    /// Wraps `page` in a session configured by `cfg`. Nothing is attached yet.
    pub fn new(page: Page, cfg: &Config) -> Self {
        let format: Box<dyn Format> = if cfg.markdown {
            Box::new(MarkdownFormat)
        } else {
            Box::new(Passthrough)
        };
        Self {
            page,
            bindings: Bindings::default(),
            slider: Slider::default(),
            theme: ThemeToggle::default(),
            scroll: SmoothScroll,
            hover: Hover,
            book: BookButtons,
            filters: FilterChips::default(),
            nav: MobileNav::default(),
            loader: Loader::default(),
            booking: BookingForm::default(),
            newsletter: NewsletterForm::default(),
            timers: Timers::default(),
            renderer: Renderer::new(format, &cfg.fallback_message),
            slide_interval_ms: cfg.slide_interval_ms,
        }
    }

    /// Attaches every controller to the static markup and starts the slider interval.
    pub fn boot(&mut self) {
        let controllers: [&mut dyn Controller; 8] = [
            &mut self.loader,
            &mut self.theme,
            &mut self.scroll,
            &mut self.slider,
            &mut self.hover,
            &mut self.book,
            &mut self.filters,
            &mut self.nav,
        ];
        for controller in controllers {
            controller.attach(&self.page, &mut self.bindings);
        }
        self.booking.attach(&self.page, &mut self.bindings);
        self.newsletter.attach(&self.page, &mut self.bindings);

        loader::stamp_year(&mut self.page);
        if !self.slider.is_empty() {
            self.timers.every(self.slide_interval_ms, TimerTask::AdvanceSlide);
        }
        debug!(listeners = self.bindings.len(), "page booted");
    }

    /// Fetches and renders content, then binds the injected cards.
    ///
    /// Returns `None` when loading failed and the fallback message was shown instead.
    pub fn hydrate(&mut self, source: &dyn ContentSource) -> Option<RenderOutput> {
        let output = self.renderer.hydrate(source, &mut self.page)?;
        Hover::attach_to(&output.service_cards, &mut self.bindings);
        BookButtons::attach_to(&output.book_buttons, &mut self.bindings);
        self.filters.apply(&mut self.page);
        Some(output)
    }

    /// Delivers one event to the listeners bound on its target.
    pub fn dispatch(&mut self, event: &Event) -> Outcome {
        let target = event.target(self.page.root());
        if let Event::Input { value, .. } = event {
            self.page.get_mut(target).set_value(value);
        }

        let mut outcome = Outcome::default();
        for handler in self.bindings.handlers(target, event.kind()) {
            outcome.handled += 1;
            outcome.default_prevented |= self.run(handler, target);
        }
        outcome
    }

    /// Runs one listener; returns whether it prevented the default action.
    fn run(&mut self, handler: Handler, target: ElementId) -> bool {
        let page = &mut self.page;
        match handler {
            Handler::PageLoaded => {
                if self.loader.is_present() {
                    self.timers.after(HIDE_AFTER_MS, TimerTask::HideLoader);
                    self.timers.after(REMOVE_AFTER_MS, TimerTask::RemoveLoader);
                }
                false
            }
            Handler::ToggleTheme => {
                self.theme.toggle(page);
                false
            }
            Handler::SmoothScroll => SmoothScroll::on_click(page, target),
            Handler::NextSlide => {
                self.slider.next(page);
                false
            }
            Handler::PrevSlide => {
                self.slider.prev(page);
                false
            }
            Handler::HoverOn => {
                Hover::set(page, target, true);
                false
            }
            Handler::HoverOff => {
                Hover::set(page, target, false);
                false
            }
            Handler::BookService => {
                BookButtons::on_click(page, target);
                false
            }
            Handler::ChooseFilter => {
                self.filters.choose(page, target);
                false
            }
            Handler::ToggleNav => {
                self.nav.toggle(page);
                false
            }
            Handler::BookingInput(field) => {
                self.booking.on_input(page, field);
                false
            }
            Handler::BookingBlur(field) => {
                self.booking.on_blur(page, field);
                false
            }
            Handler::BookingSubmit => {
                self.booking.on_submit(page);
                true
            }
            Handler::NewsletterSubmit => {
                self.newsletter.on_submit(page);
                true
            }
        }
    }

    /// Moves the page clock forward, running due timers in order.
    pub fn advance(&mut self, ms: u64) {
        for task in self.timers.advance(ms) {
            match task {
                TimerTask::AdvanceSlide => self.slider.next(&mut self.page),
                TimerTask::HideLoader => self.loader.hide(&mut self.page),
                TimerTask::RemoveLoader => self.loader.remove(&mut self.page),
            }
        }
    }

    #[must_use]
    /// Convenience lookup of an element by id.
    pub fn element(&self, id: &str) -> Option<ElementId> {
        self.page.by_id(id)
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
