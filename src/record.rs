//! Pipe-delimited records carried by list items.
//!
//! A record is one list item such as `hair | Signature Cut | Wash, cut and style | ₹799 | cut`.
//! Field meaning is positional and owned by each consumer; a record never validates its own
//! field count, and positions past the end read as empty text.

/// Positional fields of one record, each trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields<'a>(Vec<&'a str>);

impl<'a> Fields<'a> {
    #[must_use]
    /// Splits `line` on `|` and trims every field.
    pub fn split(line: &'a str) -> Self {
        Self(line.split('|').map(str::trim).collect())
    }

    #[must_use]
    /// Field at `index`, or empty text when the record is short.
    pub fn get(&self, index: usize) -> &'a str {
        self.0.get(index).copied().unwrap_or("")
    }

    #[must_use]
    /// Number of fields actually present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    /// True when the record has no fields (never the case for split input).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parses one list item into a typed record.
pub trait Record: Sized {
    /// Builds the record from its positional fields.
    fn from_fields(fields: &Fields<'_>) -> Self;

    #[must_use]
    /// Splits and parses a raw list item.
    fn parse(line: &str) -> Self {
        Self::from_fields(&Fields::split(line))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `category | title | description | price | tags`
pub struct ServiceItem {
    /// Filter category, lower-cased for use as a class name.
    pub category: String,
    /// Card heading.
    pub title: String,
    /// Card body text.
    pub description: String,
    /// Display price.
    pub price: String,
    /// Space-separated tags.
    pub tags: String,
}

impl Record for ServiceItem {
    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            category: fields.get(0).to_lowercase(),
            title: fields.get(1).to_string(),
            description: fields.get(2).to_string(),
            price: fields.get(3).to_string(),
            tags: fields.get(4).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `label | price`
pub struct PriceRow {
    /// Treatment name.
    pub label: String,
    /// Display price.
    pub price: String,
}

impl Record for PriceRow {
    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            label: fields.get(0).to_string(),
            price: fields.get(1).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `quote | name`
pub struct Testimonial {
    /// What the guest said.
    pub quote: String,
    /// Who said it; empty when anonymous.
    pub name: String,
}

impl Record for Testimonial {
    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            quote: fields.get(0).to_string(),
            name: fields.get(1).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `label | value`
pub struct ContactDetail {
    /// Detail kind, e.g. `Phone`.
    pub label: String,
    /// Detail value.
    pub value: String,
}

impl Record for ContactDetail {
    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            label: fields.get(0).to_string(),
            value: fields.get(1).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `name | url`
pub struct SocialLink {
    /// Network name shown on the button.
    pub name: String,
    /// Profile URL; empty or `#` means no destination.
    pub url: String,
}

impl SocialLink {
    #[must_use]
    /// The link destination, `#` when no usable URL was given.
    pub fn href(&self) -> &str {
        if self.url.is_empty() || self.url == "#" {
            "#"
        } else {
            &self.url
        }
    }
}

impl Record for SocialLink {
    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            name: fields.get(0).to_string(),
            url: fields.get(1).to_string(),
        }
    }
}

#[cfg(test)]
#[path = "tests/record.rs"]
mod tests;
