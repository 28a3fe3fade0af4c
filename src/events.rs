//! Discrete user events and the table of listeners bound to page elements.
//!
//! A listener only fires for an element it was attached to. Elements created after the
//! initial attach (injected service cards, their book buttons) are inert until a controller
//! attaches to them, which is what makes re-binding after render observable.

use crate::forms::booking::BookingField;
use crate::page::ElementId;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A user or window event aimed at one element.
pub enum Event {
    /// The window finished loading; aimed at the document root.
    Load,
    /// Primary click.
    Click(ElementId),
    /// Pointer entered the element.
    PointerEnter(ElementId),
    /// Pointer left the element.
    PointerLeave(ElementId),
    /// The user changed a control's value.
    Input {
        /// Control receiving the input.
        target: ElementId,
        /// New raw value.
        value: String,
    },
    /// A control lost focus.
    Blur(ElementId),
    /// A form was submitted.
    Submit(ElementId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Event type without its payload, used as a binding key.
pub enum EventKind {
    /// See [`Event::Load`].
    Load,
    /// See [`Event::Click`].
    Click,
    /// See [`Event::PointerEnter`].
    PointerEnter,
    /// See [`Event::PointerLeave`].
    PointerLeave,
    /// See [`Event::Input`].
    Input,
    /// See [`Event::Blur`].
    Blur,
    /// See [`Event::Submit`].
    Submit,
}

impl Event {
    #[must_use]
    /// The element the event is aimed at, with `root` standing in for window events.
    pub fn target(&self, root: ElementId) -> ElementId {
        match self {
            Event::Load => root,
            Event::Click(el)
            | Event::PointerEnter(el)
            | Event::PointerLeave(el)
            | Event::Blur(el)
            | Event::Submit(el)
            | Event::Input { target: el, .. } => *el,
        }
    }

    #[must_use]
    /// The binding key of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Load => EventKind::Load,
            Event::Click(_) => EventKind::Click,
            Event::PointerEnter(_) => EventKind::PointerEnter,
            Event::PointerLeave(_) => EventKind::PointerLeave,
            Event::Input { .. } => EventKind::Input,
            Event::Blur(_) => EventKind::Blur,
            Event::Submit(_) => EventKind::Submit,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a bound listener does when its event fires.
pub enum Handler {
    /// Schedule the loader fade-out.
    PageLoaded,
    /// Flip the colour theme.
    ToggleTheme,
    /// Scroll to an in-page anchor.
    SmoothScroll,
    /// Show the next slide.
    NextSlide,
    /// Show the previous slide.
    PrevSlide,
    /// Mark a service card as hovered.
    HoverOn,
    /// Clear a service card's hover mark.
    HoverOff,
    /// Preselect a service in the booking form and jump to it.
    BookService,
    /// Activate a filter chip.
    ChooseFilter,
    /// Open or close the mobile navigation.
    ToggleNav,
    /// Clear a booking field's error while typing.
    BookingInput(BookingField),
    /// Validate a booking field on blur.
    BookingBlur(BookingField),
    /// Validate and collect the booking form.
    BookingSubmit,
    /// Validate the newsletter form.
    NewsletterSubmit,
}

#[derive(Debug, Default, Clone)]
/// Listener table keyed by element and event kind.
pub struct Bindings {
    table: HashMap<(ElementId, EventKind), Vec<Handler>>,
}

impl Bindings {
    /// Attaches `handler`; attaching the same handler twice is a no-op.
    pub fn bind(&mut self, element: ElementId, kind: EventKind, handler: Handler) {
        let handlers = self.table.entry((element, kind)).or_default();
        if !handlers.contains(&handler) {
            handlers.push(handler);
        }
    }

    #[must_use]
    /// Listeners for `event` on `element`, in attach order.
    pub fn handlers(&self, element: ElementId, kind: EventKind) -> Vec<Handler> {
        self.table
            .get(&(element, kind))
            .cloned()
            .unwrap_or_default()
    }

    #[must_use]
    /// Whether any listener of `kind` is attached to `element`.
    pub fn is_bound(&self, element: ElementId, kind: EventKind) -> bool {
        self.table
            .get(&(element, kind))
            .is_some_and(|handlers| !handlers.is_empty())
    }

    #[must_use]
    /// Total number of attached listeners.
    pub fn len(&self) -> usize {
        self.table.values().map(Vec::len).sum()
    }

    #[must_use]
    /// True when nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Result of dispatching one event.
pub struct Outcome {
    /// Whether a listener suppressed the browser's default action.
    pub default_prevented: bool,
    /// Number of listeners that ran.
    pub handled: usize,
}
