use super::AppState;
use crate::config::Config;
use crate::controllers::theme::Theme;
use crate::events::{Event, EventKind};
use crate::forms::FormState;
use crate::markup::{Node, Tag};
use crate::source::{FileSource, StaticSource};
use crate::template::storefront;
use chrono::Datelike;
use std::io::Write;
use tempfile::NamedTempFile;

const CONTENT: &str = "\
# Services
## Items
- hair | Signature Cut | Wash and style | ₹799
- spa | Aroma Massage | Sixty minutes | ₹1999
- beauty | Bridal Makeup | HD makeup | ₹9999

# FAQ
Walk-ins welcome.
";

fn booted() -> AppState {
    let mut app = AppState::new(storefront(), &Config::default());
    app.boot();
    app
}

fn hydrated() -> AppState {
    let mut app = booted();
    app.hydrate(&StaticSource::ok(CONTENT)).unwrap();
    app
}

fn el(app: &AppState, id: &str) -> crate::page::ElementId {
    app.element(id).unwrap()
}

#[test]
fn test_boot_binds_static_controls() {
    let app = booted();
    for id in ["themeToggle", "navToggle", "nextSlide", "prevSlide"] {
        assert!(app.bindings.is_bound(el(&app, id), EventKind::Click), "{id}");
    }
    assert!(app.bindings.is_bound(el(&app, "bookForm"), EventKind::Submit));
    assert!(app.bindings.is_bound(el(&app, "newsletterForm"), EventKind::Submit));
    assert!(app.bindings.is_bound(app.page.root(), EventKind::Load));
    assert_eq!(app.slider.len(), 3);
}

#[test]
fn test_footer_year_is_stamped() {
    let app = booted();
    assert_eq!(
        app.page.text_content(el(&app, "year")),
        chrono::Local::now().year().to_string()
    );
}

#[test]
fn test_injected_cards_are_bound_after_hydrate() {
    let mut app = booted();
    let output = app.hydrate(&StaticSource::ok(CONTENT)).unwrap();

    assert_eq!(output.service_cards.len(), 3);
    for card in &output.service_cards {
        assert!(app.bindings.is_bound(*card, EventKind::PointerEnter));
        assert!(app.bindings.is_bound(*card, EventKind::PointerLeave));
    }
    for button in &output.book_buttons {
        assert!(app.bindings.is_bound(*button, EventKind::Click));
    }

    let card = output.service_cards[1];
    app.dispatch(&Event::PointerEnter(card));
    assert!(app.page.get(card).has_class("hovered"));
    app.dispatch(&Event::PointerLeave(card));
    assert!(!app.page.get(card).has_class("hovered"));
}

#[test]
fn test_unattached_elements_stay_inert() {
    let mut app = booted();
    let grid = el(&app, "serviceCards");
    let created = app.page.replace_children(
        grid,
        &[Node::from(Tag::new("article").class("card service hair"))],
    );

    assert!(!app.bindings.is_bound(created[0], EventKind::PointerEnter));
    let outcome = app.dispatch(&Event::PointerEnter(created[0]));
    assert_eq!(outcome.handled, 0);
    assert!(!app.page.get(created[0]).has_class("hovered"));
}

#[test]
fn test_book_button_preselects_service() {
    let mut app = hydrated();
    let button = app.page.select_all(&["book-btn"])[2];

    let outcome = app.dispatch(&Event::Click(button));

    assert_eq!(outcome.handled, 1);
    assert!(!outcome.default_prevented);
    assert_eq!(app.page.get(el(&app, "service")).value(), "Bridal Makeup");
    assert_eq!(app.page.scrolled_to(), app.element("booking"));
}

#[test]
fn test_theme_toggle_flips_glyph() {
    let mut app = booted();
    let toggle = el(&app, "themeToggle");

    app.dispatch(&Event::Click(toggle));
    assert_eq!(app.page.get(app.page.root()).attr("data-theme"), Some("dark"));
    assert_eq!(app.page.text_content(toggle), Theme::Dark.glyph());

    app.dispatch(&Event::Click(toggle));
    assert_eq!(app.page.get(app.page.root()).attr("data-theme"), Some("light"));
    assert_eq!(app.page.text_content(toggle), "🌙");
}

#[test]
fn test_mobile_nav_attribute_and_class_move_together() {
    let mut app = booted();
    let toggle = el(&app, "navToggle");
    let menu = app.page.select_all(&["nav-links"])[0];

    for open in [true, false, true] {
        app.dispatch(&Event::Click(toggle));
        let expected = if open { "true" } else { "false" };
        assert_eq!(app.page.get(toggle).attr("aria-expanded"), Some(expected));
        assert_eq!(app.page.get(menu).has_class("open"), open);
        assert_eq!(app.nav.is_expanded(), open);
    }
}

#[test]
fn test_filter_chips_are_exclusive() {
    let mut app = hydrated();
    let chips = app.page.select_all(&["chip"]);
    let spa = chips[3];

    app.dispatch(&Event::Click(spa));

    let active: Vec<_> = chips
        .iter()
        .filter(|chip| app.page.get(**chip).has_class("active"))
        .collect();
    assert_eq!(active, vec![&spa]);

    let visible: Vec<String> = app
        .page
        .select_all(&["card", "service"])
        .into_iter()
        .filter(|card| !app.page.get(*card).has_attr("hidden"))
        .map(|card| app.page.text_content(app.page.select_tag(card, "h3")[0]))
        .collect();
    assert_eq!(visible, vec!["Aroma Massage"]);

    app.dispatch(&Event::Click(chips[0]));
    assert!(app
        .page
        .select_all(&["card", "service"])
        .iter()
        .all(|card| !app.page.get(*card).has_attr("hidden")));
}

#[test]
fn test_smooth_scroll_prevents_default_only_for_existing_targets() {
    let mut app = booted();
    let links = app.page.select_tag(app.page.select_all(&["nav-links"])[0], "a");
    let pricing = links[1];

    let outcome = app.dispatch(&Event::Click(pricing));
    assert!(outcome.default_prevented);
    assert_eq!(app.page.scrolled_to(), app.element("pricing"));

    app.page.get_mut(pricing).set_attr("href", "#nowhere");
    let outcome = app.dispatch(&Event::Click(pricing));
    assert_eq!(outcome.handled, 1);
    assert!(!outcome.default_prevented);
}

#[test]
fn test_slider_advances_on_interval_and_buttons() {
    let mut app = booted();
    let track = el(&app, "slides");

    app.advance(4999);
    assert_eq!(app.slider.index(), 0);
    app.advance(1);
    assert_eq!(app.slider.index(), 1);
    assert_eq!(
        app.page.get(track).attr("style"),
        Some("transform: translateX(-100%)")
    );

    app.advance(10_000);
    assert_eq!(app.slider.index(), 0);

    app.dispatch(&Event::Click(el(&app, "prevSlide")));
    assert_eq!(app.slider.index(), 2);
}

#[test]
fn test_loader_fades_then_leaves() {
    let mut app = booted();
    let loader = el(&app, "page-loader");

    app.dispatch(&Event::Load);
    app.advance(349);
    assert!(!app.page.get(loader).has_class("hide"));
    app.advance(1);
    assert!(app.page.get(loader).has_class("hide"));
    assert!(app.element("page-loader").is_some());

    app.advance(550);
    assert!(app.element("page-loader").is_none());
    assert!(!app.loader.is_present());
}

#[test]
fn test_booking_submit_through_dispatch() {
    let mut app = booted();
    let form = el(&app, "bookForm");

    let outcome = app.dispatch(&Event::Submit(form));
    assert!(outcome.default_prevented);
    assert!(app.booking.state().is_invalid());

    for (id, value) in [
        ("name", "Asha"),
        ("phone", "+91 9876543210"),
        ("service", "Haircut"),
        ("date", "2026-11-02"),
    ] {
        let target = el(&app, id);
        app.dispatch(&Event::Input {
            target,
            value: value.to_string(),
        });
    }
    assert_eq!(*app.booking.state(), FormState::Clean);

    app.dispatch(&Event::Submit(form));
    assert_eq!(*app.booking.state(), FormState::Valid);
    assert_eq!(app.booking.submissions()[0].name, "Asha");
    assert_eq!(
        app.page.text_content(el(&app, "formStatus")),
        "Booking confirmed! We'll WhatsApp you shortly."
    );
}

#[test]
fn test_newsletter_accepts_only_valid_addresses() {
    let mut app = booted();
    let form = el(&app, "newsletterForm");
    let email = el(&app, "email");
    let status = app.page.select_all(&["nstatus"])[0];

    app.dispatch(&Event::Input {
        target: email,
        value: "not an email".into(),
    });
    assert!(app.dispatch(&Event::Submit(form)).default_prevented);
    assert_eq!(app.page.text_content(status), "Enter a valid email.");
    assert_eq!(app.page.get(email).value(), "not an email");

    app.dispatch(&Event::Input {
        target: email,
        value: "guest@example.com".into(),
    });
    app.dispatch(&Event::Submit(form));
    assert_eq!(app.page.text_content(status), "Thanks! Please check your inbox.");
    assert_eq!(app.page.get(email).value(), "");
    assert_eq!(app.newsletter.subscribers(), ["guest@example.com"]);
}

#[test]
fn test_hydrate_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{CONTENT}").unwrap();

    let mut app = booted();
    let output = app.hydrate(&FileSource::new(file.path())).unwrap();

    assert_eq!(output.service_cards.len(), 3);
    assert_eq!(
        app.page.inner_html(el(&app, "md-content")),
        "<p>Walk-ins welcome.</p>\n"
    );
}

#[test]
fn test_failed_hydrate_keeps_controls_working() {
    let mut app = booted();
    assert!(app.hydrate(&StaticSource::failing(500)).is_none());
    assert_eq!(
        app.page.text_content(el(&app, "md-content")),
        "Unable to load content."
    );

    let card = app.page.select_all(&["card", "service"])[0];
    app.dispatch(&Event::PointerEnter(card));
    assert!(app.page.get(card).has_class("hovered"));
}
