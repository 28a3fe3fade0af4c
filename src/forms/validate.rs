//! Field patterns shared by both forms.

use regex::Regex;
use std::sync::LazyLock;

static MOBILE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[6-9]\d{9}$").ok());

static MOBILE_WITH_CODE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\+91\s?[6-9]\d{9}$").ok());

static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

fn matches(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(value))
}

#[must_use]
/// Ten digits starting 6-9, optionally prefixed by `+91` and an optional space.
pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    matches(&MOBILE, value) || matches(&MOBILE_WITH_CODE, value)
}

#[must_use]
/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(value: &str) -> bool {
    matches(&EMAIL, value.trim())
}
