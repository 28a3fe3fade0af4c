//! Line scanner that turns a content document into named sections.
//!
//! Parsing happens in two passes. The first pass walks the document line by line and emits a
//! [`HeadingToken`] for every heading of the requested level. The second pass pairs each token
//! with the start of the next one to produce [`Section`] spans, which are indexed by name.
//!
//! Lookups never fail: a missing section, subsection or list resolves to empty text.

use crate::section::{HeadingToken, Section};
use std::collections::HashMap;

/// Key under which a document with no top-level headings is stored.
pub const FALLBACK_SECTION: &str = "FAQ";

const HEADING_MARKER: char = '#';
const LIST_MARKER: char = '-';

/// Yields every line together with the byte offset it starts at.
fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    text.split_inclusive('\n').map(move |line| {
        let start = offset;
        offset += line.len();
        (start, line.trim_end_matches(['\n', '\r']))
    })
}

/// Recognises `line` as a heading of exactly `level` markers.
///
/// Returns the trimmed heading text and its end offset relative to the line start.
fn heading_of(line: &str, level: usize) -> Option<(&str, usize)> {
    let markers = line.chars().take_while(|c| *c == HEADING_MARKER).count();
    if markers != level {
        return None;
    }
    let rest = &line[level..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let name = rest.trim();
    if name.is_empty() {
        return None;
    }
    Some((name, line.trim_end().len()))
}

#[must_use]
/// First pass: collect heading tokens of one level in document order.
pub fn scan_headings(text: &str, level: usize) -> Vec<HeadingToken<'_>> {
    lines_with_offsets(text)
        .enumerate()
        .filter_map(|(index, (start, line))| {
            heading_of(line, level).map(|(name, len)| HeadingToken {
                level,
                name,
                line: index + 1,
                start,
                end: start + len,
            })
        })
        .collect()
}

/// Second pass: pair each token with the start of its successor.
fn sections_from_tokens(tokens: &[HeadingToken<'_>], text_len: usize) -> Vec<Section> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let end = tokens.get(i + 1).map_or(text_len, |next| next.start);
            Section::from_token(token, end)
        })
        .collect()
}

/// Finds the body of the heading named `name` at `level` inside `text`.
fn block_of<'a>(text: &'a str, level: usize, matches: impl Fn(&str) -> bool) -> &'a str {
    let tokens = scan_headings(text, level);
    sections_from_tokens(&tokens, text.len())
        .iter()
        .find(|section| matches(&section.name))
        .map_or("", |section| section.body(text))
}

/// The parsed section map of one content document.
///
/// Borrows the raw document; bodies are sliced from it lazily.
#[derive(Debug, Clone)]
pub struct Sections<'a> {
    raw: &'a str,
    entries: Vec<Section>,
    by_name: HashMap<String, usize>,
}

impl<'a> Sections<'a> {
    #[must_use]
    /// Looks up the trimmed body of a top-level section by exact name.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.by_name
            .get(name)
            .map(|&index| self.entries[index].body(self.raw))
    }

    #[must_use]
    /// Body of a top-level section, or empty text when absent.
    pub fn section(&self, name: &str) -> &'a str {
        self.get(name).unwrap_or("")
    }

    #[must_use]
    /// Body of a `##` subsection, matched case-insensitively.
    pub fn subsection(&self, section: &str, sub: &str) -> &'a str {
        let wanted = sub.to_lowercase();
        block_of(self.section(section), 2, |name| name.to_lowercase() == wanted)
    }

    #[must_use]
    /// Body of a `###` block inside a top-level section, matched by exact name.
    ///
    /// The block runs until the next `###` heading or the end of the section.
    pub fn nested(&self, section: &str, name: &str) -> &'a str {
        block_of(self.section(section), 3, |candidate| candidate == name)
    }

    #[must_use]
    /// List items of a `##` subsection.
    pub fn items(&self, section: &str, sub: &str) -> Vec<String> {
        split_list_items(self.subsection(section, sub))
    }

    #[must_use]
    /// Number of distinct section names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    /// True when the map holds no sections at all.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    #[must_use]
    /// Section names in document order, duplicates included.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|s| s.name.as_str()).collect()
    }

    #[must_use]
    /// Raw spans (heading line plus untrimmed body) in document order.
    pub fn spans(&self) -> Vec<&'a str> {
        self.entries.iter().map(|s| s.span(self.raw)).collect()
    }

    #[must_use]
    /// All scanned sections in document order.
    pub fn entries(&self) -> &[Section] {
        &self.entries
    }
}

#[must_use]
/// Splits a content document into its top-level sections.
///
/// A document without any `# ` heading is stored whole under [`FALLBACK_SECTION`].
/// Duplicate names resolve to the last occurrence.
pub fn parse_sections(raw: &str) -> Sections<'_> {
    let tokens = scan_headings(raw, 1);
    let entries = if tokens.is_empty() {
        vec![Section {
            name: FALLBACK_SECTION.to_string(),
            level: 1,
            line: 0,
            heading_start: 0,
            body_start: 0,
            body_end: raw.len(),
        }]
    } else {
        sections_from_tokens(&tokens, raw.len())
    };

    let by_name = entries
        .iter()
        .enumerate()
        .map(|(index, section)| (section.name.clone(), index))
        .collect();

    Sections {
        raw,
        entries,
        by_name,
    }
}

#[must_use]
/// Free-function form of [`Sections::subsection`].
pub fn subsection_of<'a>(sections: &Sections<'a>, section: &str, sub: &str) -> &'a str {
    sections.subsection(section, sub)
}

/// Whether `line` opens a list item, returning the text after the marker.
fn list_item_of(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(LIST_MARKER)?;
    (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest.trim_start())
}

#[must_use]
/// Splits text on line-leading `- ` markers into trimmed, non-empty items.
///
/// Text before the first marker counts as an item of its own when it is not blank.
pub fn split_list_items(text: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();

    for (_, line) in lines_with_offsets(text) {
        if let Some(rest) = list_item_of(line) {
            push_item(&mut items, &current);
            current.clear();
            current.push_str(rest);
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    push_item(&mut items, &current);
    items
}

fn push_item(items: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        items.push(trimmed.to_string());
    }
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests;
