//! Configuration to acknowledge site preferences as well as set defaults.
//!
//! Specifically, we try to find a salonpage.toml, and if present we load settings from there.
//! This provides the content document location, whether Markdown conversion is on, the slider
//! interval and the message shown when content fails to load.

use crate::error::SiteError;
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File looked up in the working directory by [`Config::load`].
pub const CONFIG_FILE: &str = "salonpage.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// Site preferences loaded from salonpage.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "content.md".to_string())]
    /// Content document, relative to the working directory.
    pub content_path: String,
    #[facet(default = true)]
    /// Convert fragments with Markdown; when off, text is injected unconverted.
    pub markdown: bool,
    #[facet(default = 5000)]
    /// Hero slider auto-advance period in milliseconds.
    pub slide_interval_ms: u64,
    #[facet(default = "Unable to load content.".to_string())]
    /// Text placed in the FAQ area when hydration fails.
    pub fallback_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_path: "content.md".to_string(),
            markdown: true,
            slide_interval_ms: 5000,
            fallback_message: "Unable to load content.".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from salonpage.toml if present.
    ///
    /// An unreadable or malformed file is reported and the defaults are used instead.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(path).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring {CONFIG_FILE}");
            Self::default()
        })
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration.
    pub fn load_from(path: &Path) -> Result<Self, SiteError> {
        let contents = fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        facet_toml::from_str::<Self>(&contents).map_err(|e| SiteError::Config(e.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
