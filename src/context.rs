//! Shared context for the Folio app.
//!
//! The catalog is immutable and shared by reference; the theme is a
//! signal paired with its persistent store so every toggle is written
//! back immediately.

use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{Catalog, Theme, ThemeStore};

/// Shared catalog type for context.
///
/// The catalog never changes after startup, so components share one
/// allocation instead of a signal.
pub type SharedCatalog = Arc<Catalog>;

/// Hook to access the project catalog from context.
pub fn use_catalog() -> SharedCatalog {
    use_context::<SharedCatalog>()
}

/// Theme signal plus the store it persists to.
#[derive(Clone, Copy)]
pub struct ThemeController {
    theme: Signal<Theme>,
    store: Signal<ThemeStore>,
}

impl ThemeController {
    pub fn new(theme: Signal<Theme>, store: Signal<ThemeStore>) -> Self {
        Self { theme, store }
    }

    /// The current theme.
    pub fn current(&self) -> Theme {
        (self.theme)()
    }

    /// Flip the theme and persist the new preference.
    ///
    /// A failed write keeps the in-session theme; the preference just
    /// does not survive the restart.
    pub fn toggle(&mut self) {
        let next = self.current().toggle();
        self.theme.set(next);
        if let Err(e) = self.store.read().save(next) {
            tracing::warn!(error = %e, "Failed to persist theme preference");
        }
        tracing::info!(theme = %next, "Theme toggled");
    }
}

/// Hook to access the theme controller from context.
pub fn use_theme() -> ThemeController {
    use_context::<ThemeController>()
}
