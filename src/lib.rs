//! salonpage: content hydration, interactions and form validation for a salon landing page.
//!
//! A content document is split into sections by [`parser`], rendered into the page's
//! insertion points by [`render`], and the resulting page is driven by the controllers and
//! forms owned by [`app_state::AppState`].

pub mod app_state;
pub mod config;
pub mod controllers;
pub mod error;
pub mod events;
pub mod formats;
pub mod forms;
pub mod markup;
pub mod page;
pub mod parser;
pub mod record;
pub mod render;
pub mod section;
pub mod source;
pub mod template;
pub mod timers;

pub use app_state::AppState;
pub use error::SiteError;
pub use parser::{parse_sections, split_list_items, subsection_of, Sections};
