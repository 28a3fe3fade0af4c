//! Format trait and implementations for turning content text into markup.
//!
//! This module defines the `Format` trait which abstracts over the text-to-HTML converter the
//! renderer calls on every fragment. The converter is a black box to the rest of the crate:
//! callers hand it a fragment and inject whatever comes back.

pub mod markdown;

/// Converts a content fragment into an HTML fragment.
pub trait Format {
    /// Renders `text` to HTML.
    fn render(&self, text: &str) -> String;
}

/// Used when no converter is available: text is injected unconverted.
pub struct Passthrough;

impl Format for Passthrough {
    fn render(&self, text: &str) -> String {
        text.to_string()
    }
}
