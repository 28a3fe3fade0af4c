//! Section representation for line-scanned content documents.
//!
//! A section is a named division of the content document, introduced by a heading line.
//! Sections never copy their text: they record byte coordinates into the raw document so that
//! bodies can be sliced out on demand and the original can be reconstructed from the spans.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A heading line recognised by the first scanner pass.
pub struct HeadingToken<'a> {
    /// Number of `#` markers (1 for top-level).
    pub level: usize,
    /// Heading text with surrounding whitespace removed.
    pub name: &'a str,
    /// 1-indexed line number of the heading.
    pub line: usize,
    /// Byte offset where the heading line begins.
    pub start: usize,
    /// Byte offset just past the heading text (before the line terminator).
    pub end: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Named document division with precise coordinates for body extraction.
pub struct Section {
    /// Section heading text without markup symbols.
    pub name: String,
    /// Nesting depth in the document hierarchy (1 for top-level).
    pub level: usize,
    /// 1-indexed line of the heading, or 0 for the headless fallback section.
    pub line: usize,
    /// Byte offset where the heading line begins.
    pub heading_start: usize,
    /// Byte offset where section content begins.
    pub body_start: usize,
    /// Byte offset where the next section begins or the document ends.
    pub body_end: usize,
}

impl Section {
    #[must_use]
    /// Builds a section whose body runs from the end of `token` to `body_end`.
    pub fn from_token(token: &HeadingToken<'_>, body_end: usize) -> Self {
        Self {
            name: token.name.to_string(),
            level: token.level,
            line: token.line,
            heading_start: token.start,
            body_start: token.end,
            body_end,
        }
    }

    #[must_use]
    /// Slices the trimmed body out of the document this section was scanned from.
    pub fn body<'a>(&self, raw: &'a str) -> &'a str {
        raw.get(self.body_start..self.body_end).unwrap_or("").trim()
    }

    #[must_use]
    /// Raw span from the heading line to the end of the body, untrimmed.
    pub fn span<'a>(&self, raw: &'a str) -> &'a str {
        raw.get(self.heading_start..self.body_end).unwrap_or("")
    }
}
