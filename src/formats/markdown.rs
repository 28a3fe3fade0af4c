//! Markdown format implementation using pulldown-cmark.
//!
//! `CommonMark` plus tables and strikethrough, matching what page authors expect from the
//! content document.

use crate::formats::Format;
use pulldown_cmark::{html, Options, Parser};

/// `CommonMark` renderer for content fragments.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn render(&self, text: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(text, options);
        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}
