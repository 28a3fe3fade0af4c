use super::{BookingField, BookingForm};
use crate::events::Bindings;
use crate::forms::FormState;
use crate::page::Page;
use crate::template::storefront;

fn setup() -> (Page, BookingForm) {
    let page = storefront();
    let mut form = BookingForm::default();
    form.attach(&page, &mut Bindings::default());
    (page, form)
}

fn fill(page: &mut Page, field: BookingField, value: &str) {
    let input = page.by_id(field.id()).unwrap();
    page.get_mut(input).set_value(value);
}

fn error_text(page: &Page, field: BookingField) -> String {
    let input = page.by_id(field.id()).unwrap();
    page.next_element_sibling(input)
        .filter(|el| page.get(*el).has_class("error"))
        .map(|el| page.text_content(el))
        .unwrap_or_default()
}

fn status(page: &Page) -> String {
    page.text_content(page.by_id("formStatus").unwrap())
}

#[test]
fn test_empty_submit_shows_every_error() {
    let (mut page, mut form) = setup();

    assert!(form.on_submit(&mut page).is_none());

    for field in BookingField::ALL {
        assert_eq!(error_text(&page, field), field.message());
    }
    assert_eq!(status(&page), "Please fix the highlighted fields.");
    assert!(form.submissions().is_empty());
    match form.state() {
        FormState::Invalid(errors) => assert_eq!(errors.len(), 4),
        other => panic!("expected invalid, got {other:?}"),
    }
}

#[test]
fn test_invalid_submit_keeps_values() {
    let (mut page, mut form) = setup();
    fill(&mut page, BookingField::Name, "Asha");
    fill(&mut page, BookingField::Phone, "1234567890");

    assert!(form.on_submit(&mut page).is_none());

    assert_eq!(error_text(&page, BookingField::Name), "");
    assert_eq!(error_text(&page, BookingField::Phone), "Enter a valid phone number.");
    let name = page.by_id("name").unwrap();
    assert_eq!(page.get(name).value(), "Asha");
}

#[test]
fn test_valid_submit_collects_and_resets() {
    let (mut page, mut form) = setup();
    fill(&mut page, BookingField::Name, "  Asha ");
    fill(&mut page, BookingField::Phone, "+91 9876543210");
    fill(&mut page, BookingField::Service, "Haircut");
    fill(&mut page, BookingField::Date, "2026-11-02");

    let booking = form.on_submit(&mut page).unwrap();

    assert_eq!(booking.name, "Asha");
    assert_eq!(booking.service, "Haircut");
    assert_eq!(form.submissions().len(), 1);
    assert_eq!(*form.state(), FormState::Valid);
    assert_eq!(status(&page), "Booking confirmed! We'll WhatsApp you shortly.");
    for field in BookingField::ALL {
        assert_eq!(error_text(&page, field), "");
        assert_eq!(page.get(page.by_id(field.id()).unwrap()).value(), "");
    }
}

#[test]
fn test_blur_shows_and_input_clears_without_revalidating() {
    let (mut page, mut form) = setup();

    form.on_blur(&mut page, BookingField::Phone);
    assert_eq!(error_text(&page, BookingField::Phone), "Enter a valid phone number.");
    assert!(form.state().is_invalid());

    fill(&mut page, BookingField::Phone, "98");
    form.on_input(&mut page, BookingField::Phone);
    assert_eq!(error_text(&page, BookingField::Phone), "");
    assert_eq!(form.field(BookingField::Phone).unwrap().error, "");
    assert_eq!(*form.state(), FormState::Clean);

    form.on_blur(&mut page, BookingField::Phone);
    assert_eq!(error_text(&page, BookingField::Phone), "Enter a valid phone number.");
}

#[test]
fn test_error_element_is_reused() {
    let (mut page, mut form) = setup();
    form.on_submit(&mut page);
    form.on_submit(&mut page);

    let input = page.by_id("name").unwrap();
    let label = page.parent(input).unwrap();
    assert_eq!(page.select(label, &["error"]).len(), 1);
}
