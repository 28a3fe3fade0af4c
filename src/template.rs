//! The default page skeleton.
//!
//! Carries every insertion point, control and form the controllers and renderer look for,
//! together with the fallback copy shown until content is injected.

use crate::markup::Tag;
use crate::page::Page;

fn section(id: &str, title_id: &str, title: &str, subhead_id: &str, subhead: &str) -> Tag {
    Tag::new("section")
        .id(id)
        .class("section")
        .child(Tag::new("h2").id(title_id).text(title))
        .child(Tag::new("p").id(subhead_id).class("muted").text(subhead))
}

fn header() -> Tag {
    let links = [
        ("#services", "Services"),
        ("#pricing", "Pricing"),
        ("#gallery", "Gallery"),
        ("#booking", "Book"),
        ("#contact", "Contact"),
    ]
    .into_iter()
    .fold(Tag::new("nav").class("nav-links"), |nav, (href, label)| {
        nav.child(Tag::new("a").attr("href", href).text(label))
    });

    Tag::new("header")
        .class("site-header")
        .child(Tag::new("a").class("brand").attr("href", "#hero").text("Salon"))
        .child(
            Tag::new("button")
                .id("navToggle")
                .class("nav-toggle")
                .attr("aria-expanded", "false")
                .text("☰"),
        )
        .child(links)
        .child(Tag::new("button").id("themeToggle").class("theme-toggle").text("🌙"))
}

fn hero() -> Tag {
    let slides = (1..=3).fold(Tag::new("div").id("slides").class("slides"), |track, n| {
        track.child(
            Tag::new("div")
                .class("slide")
                .child(Tag::new("img").attr("src", &format!("img/slide-{n}.jpg")).attr("alt", "")),
        )
    });
    Tag::new("section")
        .id("hero")
        .class("hero")
        .child(
            Tag::new("div")
                .class("slider")
                .child(slides)
                .child(Tag::new("button").id("prevSlide").class("slider-btn").text("‹"))
                .child(Tag::new("button").id("nextSlide").class("slider-btn").text("›")),
        )
        .child(Tag::new("h1").id("hero-title").text("Look good, feel better"))
        .child(Tag::new("p").id("hero-subhead").text("Hair, beauty and spa under one roof."))
}

fn about() -> Tag {
    Tag::new("section")
        .id("about")
        .class("section")
        .child(Tag::new("h2").id("about-title").text("About us"))
        .child(Tag::new("p").id("about-p1").text("A neighbourhood salon."))
        .child(Tag::new("p").id("about-p2").text("Walk-ins welcome."))
}

fn default_card(category: &str, title: &str, price: &str) -> Tag {
    Tag::new("article")
        .class("card service")
        .class(category)
        .child(Tag::new("h3").text(title))
        .child(Tag::new("div").class("price").text(price))
        .child(
            Tag::new("div").class("actions mt-1").child(
                Tag::new("button")
                    .class("btn small book-btn")
                    .attr("data-service", title)
                    .text("Book"),
            ),
        )
}

fn services() -> Tag {
    let chips = [("all", "All"), ("hair", "Hair"), ("beauty", "Beauty"), ("spa", "Spa")]
        .into_iter()
        .fold(Tag::new("div").class("chips"), |row, (filter, label)| {
            let chip = Tag::new("button")
                .class("chip")
                .attr("data-filter", filter)
                .text(label);
            row.child(if filter == "all" { chip.class("active") } else { chip })
        });

    section(
        "services",
        "services-title",
        "Services",
        "services-subhead",
        "Something for everyone.",
    )
    .child(chips)
    .child(
        Tag::new("div")
            .id("serviceCards")
            .class("grid")
            .child(default_card("hair", "Haircut", "₹499"))
            .child(default_card("spa", "Head Massage", "₹399")),
    )
}

fn pricing() -> Tag {
    let column = |id: &str, heading: &str| {
        Tag::new("div")
            .id(id)
            .class("price-card")
            .child(Tag::new("h3").text(heading))
            .child(Tag::new("ul").class("price-list"))
    };
    Tag::new("section")
        .id("pricing")
        .class("section")
        .child(Tag::new("h2").text("Pricing"))
        .child(Tag::new("p").id("pricing-subhead").class("muted").text("Transparent prices."))
        .child(column("price-hair", "Hair Services"))
        .child(column("price-beauty", "Beauty & Makeup"))
        .child(column("price-spa", "Spa & Wellness"))
}

fn testimonials() -> Tag {
    section(
        "testimonials",
        "testimonials-title",
        "Testimonials",
        "testimonials-subhead",
        "What our guests say.",
    )
    .child(Tag::new("div").class("testimonial-grid"))
}

fn gallery() -> Tag {
    section("gallery", "gallery-title", "Gallery", "gallery-subhead", "Recent work.")
}

fn field(id: &str, label: &str, input: Tag) -> Tag {
    Tag::new("label")
        .attr("for", id)
        .text(label)
        .child(input)
}

fn booking() -> Tag {
    let service = ["", "Haircut", "Head Massage", "Bridal Makeup"].into_iter().fold(
        Tag::new("select").id("service").attr("name", "service"),
        |select, option| {
            let text = if option.is_empty() { "Select a service" } else { option };
            select.child(Tag::new("option").attr("value", option).text(text))
        },
    );
    let form = Tag::new("form")
        .id("bookForm")
        .attr("novalidate", "")
        .child(field(
            "name",
            "Name",
            Tag::new("input").id("name").attr("name", "name").attr("type", "text"),
        ))
        .child(field(
            "phone",
            "Phone",
            Tag::new("input").id("phone").attr("name", "phone").attr("type", "tel"),
        ))
        .child(field("service", "Service", service))
        .child(field(
            "date",
            "Date",
            Tag::new("input").id("date").attr("name", "date").attr("type", "date"),
        ))
        .child(Tag::new("button").class("btn").attr("type", "submit").text("Book now"))
        .child(Tag::new("p").id("formStatus").class("status"));

    section(
        "booking",
        "booking-title",
        "Book an appointment",
        "booking-subhead",
        "We'll confirm on WhatsApp.",
    )
    .child(form)
}

fn contact() -> Tag {
    section("contact", "contact-title", "Contact", "contact-subhead", "Find us.")
        .child(Tag::new("ul").id("contact-list").class("contact-list"))
        .child(Tag::new("div").id("socials-list").class("socials"))
}

fn faq() -> Tag {
    Tag::new("section")
        .id("faq")
        .class("section")
        .child(Tag::new("h2").text("FAQ"))
        .child(Tag::new("div").id("md-content").class("md"))
}

fn footer() -> Tag {
    Tag::new("footer")
        .class("site-footer")
        .child(
            Tag::new("form")
                .id("newsletterForm")
                .attr("novalidate", "")
                .child(
                    Tag::new("input")
                        .id("email")
                        .attr("name", "email")
                        .attr("type", "email"),
                )
                .child(Tag::new("button").class("btn").attr("type", "submit").text("Subscribe"))
                .child(Tag::new("p").class("nstatus")),
        )
        .child(
            Tag::new("p")
                .text("© ")
                .child(Tag::new("span").id("year"))
                .text(" Salon"),
        )
}

#[must_use]
/// The storefront page as served, before any content is injected.
pub fn storefront() -> Page {
    let body = Tag::new("body")
        .child(Tag::new("div").id("page-loader").class("loader"))
        .child(header())
        .child(
            Tag::new("main")
                .child(hero())
                .child(about())
                .child(services())
                .child(pricing())
                .child(testimonials())
                .child(gallery())
                .child(booking())
                .child(contact())
                .child(faq()),
        )
        .child(footer());

    Page::from_markup(
        &Tag::new("html")
            .attr("lang", "en")
            .attr("data-theme", "light")
            .child(
                Tag::new("head")
                    .child(Tag::new("meta").attr("charset", "utf-8"))
                    .child(Tag::new("title").text("Salon")),
            )
            .child(body),
    )
}
