use super::{ContactDetail, Fields, PriceRow, Record, ServiceItem, SocialLink, Testimonial};

#[test]
fn test_fields_are_trimmed_and_positional() {
    let fields = Fields::split(" hair |  Signature Cut| Wash & style |₹799 ");
    assert_eq!(fields.len(), 4);
    assert_eq!(fields.get(1), "Signature Cut");
    assert_eq!(fields.get(3), "₹799");
    assert_eq!(fields.get(4), "");
    assert_eq!(fields.get(40), "");
}

#[test]
fn test_service_item_full_record() {
    let item = ServiceItem::parse("Hair | Keratin | Smooth for months | ₹3999 | smooth frizz");
    assert_eq!(
        item,
        ServiceItem {
            category: "hair".to_string(),
            title: "Keratin".to_string(),
            description: "Smooth for months".to_string(),
            price: "₹3999".to_string(),
            tags: "smooth frizz".to_string(),
        }
    );
}

#[test]
fn test_short_records_default_missing_fields() {
    let item = ServiceItem::parse("spa | Foot Spa");
    assert_eq!(item.title, "Foot Spa");
    assert_eq!(item.description, "");
    assert_eq!(item.price, "");

    let row = PriceRow::parse("Blow-dry");
    assert_eq!(row.label, "Blow-dry");
    assert_eq!(row.price, "");

    let quote = Testimonial::parse("Loved it!");
    assert_eq!(quote.name, "");

    let detail = ContactDetail::parse("Hours|");
    assert_eq!(detail.label, "Hours");
    assert_eq!(detail.value, "");
}

#[test]
fn test_social_link_href_defaults_to_hash() {
    assert_eq!(SocialLink::parse("Instagram").href(), "#");
    assert_eq!(SocialLink::parse("Instagram | #").href(), "#");
    assert_eq!(
        SocialLink::parse("Instagram | https://instagram.com/salon").href(),
        "https://instagram.com/salon"
    );
}
