//! Where the content document comes from.
//!
//! The page fetches one same-origin text resource. [`FileSource`] reads it from disk relative
//! to the site root; [`StaticSource`] holds a response in memory, including failing ones.

use crate::error::SiteError;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Something that can produce the raw content document.
pub trait ContentSource {
    /// Fetches the full document body.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is missing or the response is not a success.
    fn fetch(&self) -> Result<String, SiteError>;
}

/// Content document on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    /// Reads from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentSource for FileSource {
    fn fetch(&self) -> Result<String, SiteError> {
        fs::read_to_string(&self.path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SiteError::Fetch {
                location: self.path.display().to_string(),
                status: 404,
            },
            _ => SiteError::Io {
                path: self.path.clone(),
                source,
            },
        })
    }
}

/// A canned response.
pub struct StaticSource {
    status: u16,
    body: String,
}

impl StaticSource {
    #[must_use]
    /// A `200` response carrying `body`.
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    #[must_use]
    /// An empty response with a non-success `status`.
    pub fn failing(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

impl ContentSource for StaticSource {
    fn fetch(&self) -> Result<String, SiteError> {
        if (200..300).contains(&self.status) {
            Ok(self.body.clone())
        } else {
            Err(SiteError::Fetch {
                location: "content.md".to_string(),
                status: self.status,
            })
        }
    }
}
