//! Renders parsed content into the page's insertion points.
//!
//! The page has a fixed set of [`Target`]s. Each is fed either by a text fragment (converted
//! through the [`Format`] and set as inner HTML) or by a list of records (templated and swapped
//! in as a whole). Rendering derives everything from the parsed sections alone, so running it
//! twice on the same document produces the same markup.
//!
//! Empty fragments leave their target alone so the page's default copy survives. List targets
//! are always replaced wholesale, even by an empty list.

use crate::controllers::book::BUTTON_CLASS;
use crate::error::SiteError;
use crate::formats::Format;
use crate::markup::{Node, Tag};
use crate::page::{ElementId, Page};
use crate::parser::{parse_sections, split_list_items, Sections, FALLBACK_SECTION};
use crate::record::{ContactDetail, PriceRow, Record, ServiceItem, SocialLink, Testimonial};
use crate::source::ContentSource;
use tracing::{debug, error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Named insertion points on the page.
pub enum Target {
    /// `#hero-title`
    HeroTitle,
    /// `#hero-subhead`
    HeroSubhead,
    /// `#about-title`
    AboutTitle,
    /// `#about-p1`
    AboutParagraph1,
    /// `#about-p2`
    AboutParagraph2,
    /// `#services-title`
    ServicesTitle,
    /// `#services-subhead`
    ServicesSubhead,
    /// `#serviceCards`
    ServiceCards,
    /// `#pricing-subhead`
    PricingSubhead,
    /// `#price-hair .price-list`
    HairPrices,
    /// `#price-beauty .price-list`
    BeautyPrices,
    /// `#price-spa .price-list`
    SpaPrices,
    /// `#testimonials-title`
    TestimonialsTitle,
    /// `#testimonials-subhead`
    TestimonialsSubhead,
    /// `.testimonial-grid`
    TestimonialGrid,
    /// `#booking-title`
    BookingTitle,
    /// `#booking-subhead`
    BookingSubhead,
    /// `#contact-title`
    ContactTitle,
    /// `#contact-subhead`
    ContactSubhead,
    /// `#contact-list`
    ContactList,
    /// `#socials-list`
    Socials,
    /// `#gallery-title`
    GalleryTitle,
    /// `#gallery-subhead`
    GallerySubhead,
    /// `#md-content`
    Faq,
}

enum Locator {
    Id(&'static str),
    Within(&'static str, &'static str),
    Class(&'static str),
}

impl Target {
    fn locator(self) -> Locator {
        match self {
            Target::HeroTitle => Locator::Id("hero-title"),
            Target::HeroSubhead => Locator::Id("hero-subhead"),
            Target::AboutTitle => Locator::Id("about-title"),
            Target::AboutParagraph1 => Locator::Id("about-p1"),
            Target::AboutParagraph2 => Locator::Id("about-p2"),
            Target::ServicesTitle => Locator::Id("services-title"),
            Target::ServicesSubhead => Locator::Id("services-subhead"),
            Target::ServiceCards => Locator::Id("serviceCards"),
            Target::PricingSubhead => Locator::Id("pricing-subhead"),
            Target::HairPrices => Locator::Within("price-hair", "price-list"),
            Target::BeautyPrices => Locator::Within("price-beauty", "price-list"),
            Target::SpaPrices => Locator::Within("price-spa", "price-list"),
            Target::TestimonialsTitle => Locator::Id("testimonials-title"),
            Target::TestimonialsSubhead => Locator::Id("testimonials-subhead"),
            Target::TestimonialGrid => Locator::Class("testimonial-grid"),
            Target::BookingTitle => Locator::Id("booking-title"),
            Target::BookingSubhead => Locator::Id("booking-subhead"),
            Target::ContactTitle => Locator::Id("contact-title"),
            Target::ContactSubhead => Locator::Id("contact-subhead"),
            Target::ContactList => Locator::Id("contact-list"),
            Target::Socials => Locator::Id("socials-list"),
            Target::GalleryTitle => Locator::Id("gallery-title"),
            Target::GallerySubhead => Locator::Id("gallery-subhead"),
            Target::Faq => Locator::Id("md-content"),
        }
    }

    #[must_use]
    /// Stable key for this target, used in JSON output.
    pub fn key(self) -> &'static str {
        match self.locator() {
            Locator::Id(id) | Locator::Within(id, _) => id,
            Locator::Class(class) => class,
        }
    }

    #[must_use]
    /// Finds the target element on `page`.
    pub fn locate(self, page: &Page) -> Option<ElementId> {
        match self.locator() {
            Locator::Id(id) => page.by_id(id),
            Locator::Within(id, class) => page
                .by_id(id)
                .and_then(|scope| page.select(scope, &[class]).first().copied()),
            Locator::Class(class) => page.select_all(&[class]).first().copied(),
        }
    }
}

/// Where a fragment target reads its text.
enum Fragment {
    Sub(&'static str, &'static str),
    Item(&'static str, &'static str, usize),
    Whole(&'static str),
}

/// Where a list target reads its items.
enum List {
    Sub(&'static str, &'static str),
    Nested(&'static str, &'static str),
}

enum Slot {
    Fragment(Fragment),
    List(List, fn(&str) -> Node),
}

/// Every target in render order with the content that feeds it.
const SCHEMA: &[(Target, Slot)] = &[
    (Target::HeroTitle, Slot::Fragment(Fragment::Sub("Hero", "Title"))),
    (Target::HeroSubhead, Slot::Fragment(Fragment::Sub("Hero", "Subhead"))),
    (Target::AboutTitle, Slot::Fragment(Fragment::Sub("About", "Title"))),
    (
        Target::AboutParagraph1,
        Slot::Fragment(Fragment::Item("About", "Paragraphs", 0)),
    ),
    (
        Target::AboutParagraph2,
        Slot::Fragment(Fragment::Item("About", "Paragraphs", 1)),
    ),
    (Target::ServicesTitle, Slot::Fragment(Fragment::Sub("Services", "Title"))),
    (Target::ServicesSubhead, Slot::Fragment(Fragment::Sub("Services", "Subhead"))),
    (Target::ServiceCards, Slot::List(List::Sub("Services", "Items"), service_card)),
    (Target::PricingSubhead, Slot::Fragment(Fragment::Sub("Pricing", "Subhead"))),
    (Target::HairPrices, Slot::List(List::Nested("Pricing", "Hair Services"), price_row)),
    (Target::BeautyPrices, Slot::List(List::Nested("Pricing", "Beauty & Makeup"), price_row)),
    (Target::SpaPrices, Slot::List(List::Nested("Pricing", "Spa & Wellness"), price_row)),
    (Target::TestimonialsTitle, Slot::Fragment(Fragment::Sub("Testimonials", "Title"))),
    (Target::TestimonialsSubhead, Slot::Fragment(Fragment::Sub("Testimonials", "Subhead"))),
    (Target::TestimonialGrid, Slot::List(List::Sub("Testimonials", "Items"), testimonial)),
    (Target::BookingTitle, Slot::Fragment(Fragment::Sub("Booking", "Title"))),
    (Target::BookingSubhead, Slot::Fragment(Fragment::Sub("Booking", "Subhead"))),
    (Target::ContactTitle, Slot::Fragment(Fragment::Sub("Contact", "Title"))),
    (Target::ContactSubhead, Slot::Fragment(Fragment::Sub("Contact", "Subhead"))),
    (Target::ContactList, Slot::List(List::Sub("Contact", "Details"), contact_detail)),
    (Target::Socials, Slot::List(List::Sub("Contact", "Socials"), social_link)),
    (Target::GalleryTitle, Slot::Fragment(Fragment::Sub("Gallery", "Title"))),
    (Target::GallerySubhead, Slot::Fragment(Fragment::Sub("Gallery", "Subhead"))),
    (Target::Faq, Slot::Fragment(Fragment::Whole(FALLBACK_SECTION))),
];

fn fragment_text(sections: &Sections<'_>, fragment: &Fragment) -> String {
    match fragment {
        Fragment::Sub(section, sub) => sections.subsection(section, sub).to_string(),
        Fragment::Item(section, sub, index) => sections
            .items(section, sub)
            .into_iter()
            .nth(*index)
            .unwrap_or_default(),
        Fragment::Whole(section) => sections.section(section).to_string(),
    }
}

fn list_items(sections: &Sections<'_>, list: &List) -> Vec<String> {
    match list {
        List::Sub(section, sub) => sections.items(section, sub),
        List::Nested(section, name) => split_list_items(sections.nested(section, name)),
    }
}

fn service_card(line: &str) -> Node {
    let item = ServiceItem::parse(line);
    Tag::new("article")
        .class("card service")
        .class(&item.category)
        .child(Tag::new("h3").text(&item.title))
        .child(Tag::new("p").text(&item.description))
        .child(Tag::new("div").class("price").text(&item.price))
        .child(
            Tag::new("div")
                .class("actions mt-1")
                .child(
                    Tag::new("button")
                        .class("btn small")
                        .class(BUTTON_CLASS)
                        .attr("data-service", &item.title)
                        .text("Book"),
                )
                .child(Tag::new("button").class("btn small outline").text("Details")),
        )
        .into()
}

fn price_row(line: &str) -> Node {
    let row = PriceRow::parse(line);
    Tag::new("li")
        .child(Tag::new("span").text(&row.label))
        .text(" ")
        .child(Tag::new("span").text(&row.price))
        .into()
}

fn testimonial(line: &str) -> Node {
    let quote = Testimonial::parse(line);
    let name = if quote.name.is_empty() {
        "Guest"
    } else {
        &quote.name
    };
    Tag::new("figure")
        .class("t-card")
        .child(Tag::new("blockquote").text(&quote.quote))
        .child(Tag::new("figcaption").text(&format!("— {name}")))
        .into()
}

fn contact_detail(line: &str) -> Node {
    let detail = ContactDetail::parse(line);
    Tag::new("li")
        .child(Tag::new("strong").text(&format!("{}:", detail.label)))
        .text(&format!(" {}", detail.value))
        .into()
}

fn social_link(line: &str) -> Node {
    let link = SocialLink::parse(line);
    Tag::new("a")
        .class("btn small ghost")
        .attr("href", link.href())
        .attr("target", "_blank")
        .attr("rel", "noopener")
        .text(&link.name)
        .into()
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// What one render pass touched.
pub struct RenderOutput {
    /// Targets whose content was replaced, in render order.
    pub rendered: Vec<Target>,
    /// Service cards created by this pass, in source order.
    pub service_cards: Vec<ElementId>,
    /// Book buttons inside the new cards.
    pub book_buttons: Vec<ElementId>,
}

/// Walks the target schema and writes content into a page.
pub struct Renderer {
    format: Box<dyn Format>,
    fallback_message: String,
}

impl Renderer {
    #[must_use]
    /// Renders fragments with `format`; `fallback_message` is shown when loading fails.
    pub fn new(format: Box<dyn Format>, fallback_message: &str) -> Self {
        Self {
            format,
            fallback_message: fallback_message.to_string(),
        }
    }

    /// Writes every target that has content.
    pub fn render(&self, sections: &Sections<'_>, page: &mut Page) -> RenderOutput {
        let mut output = RenderOutput::default();

        for (target, slot) in SCHEMA {
            let Some(element) = target.locate(page) else {
                continue;
            };
            match slot {
                Slot::Fragment(fragment) => {
                    let text = fragment_text(sections, fragment);
                    if text.is_empty() {
                        continue;
                    }
                    page.set_inner_html(element, &self.format.render(&text));
                }
                Slot::List(list, template) => {
                    let nodes: Vec<Node> = list_items(sections, list)
                        .iter()
                        .map(|line| template(line))
                        .collect();
                    let created = page.replace_children(element, &nodes);
                    if *target == Target::ServiceCards {
                        output.book_buttons = created
                            .iter()
                            .flat_map(|card| page.select(*card, &[BUTTON_CLASS]))
                            .collect();
                        output.service_cards = created;
                    }
                }
            }
            output.rendered.push(*target);
        }

        debug!(
            sections = sections.len(),
            targets = output.rendered.len(),
            cards = output.service_cards.len(),
            "rendered content"
        );
        output
    }

    /// Fetches, parses and renders the content document.
    ///
    /// # Errors
    ///
    /// Returns an error when the source cannot be fetched.
    pub fn load(
        &self,
        source: &dyn ContentSource,
        page: &mut Page,
    ) -> Result<RenderOutput, SiteError> {
        let raw = source.fetch()?;
        let sections = parse_sections(&raw);
        Ok(self.render(&sections, page))
    }

    /// [`Renderer::load`] with the single top-level fallback.
    ///
    /// On failure the FAQ area shows the fallback message and the error is logged. Targets
    /// rendered before the failure stay rendered.
    pub fn hydrate(&self, source: &dyn ContentSource, page: &mut Page) -> Option<RenderOutput> {
        match self.load(source, page) {
            Ok(output) => Some(output),
            Err(e) => {
                error!(error = %e, "content routing failed");
                if let Some(faq) = Target::Faq.locate(page) {
                    page.set_text(faq, &self.fallback_message);
                }
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
