//! Presentational interaction controllers.
//!
//! Every controller owns its state (slide index, active chip, menu expansion) and exposes it
//! only through its own operations. Attaching is a separate step from construction so it can
//! run once at boot for static markup and again after content is injected.

pub mod book;
pub mod filter;
pub mod hover;
pub mod loader;
pub mod nav;
pub mod scroll;
pub mod slider;
pub mod theme;

use crate::events::Bindings;
use crate::page::Page;

/// Binds a controller's listeners to the elements it drives.
pub trait Controller {
    /// Finds the controller's elements on `page` and registers its listeners.
    ///
    /// Safe to call repeatedly; already-bound elements are not bound twice.
    fn attach(&mut self, page: &Page, bindings: &mut Bindings);
}
