//! Folio Core Library
//!
//! Domain logic for the Folio portfolio application: the immutable
//! project catalog, category derivation and filtering, link
//! normalization, description/tag text shaping, the filter and modal
//! state machines, and the persisted theme preference.
//!
//! ## Overview
//!
//! The catalog is built once at startup and never mutated; every view
//! of it (the category list, a filtered subset, the record shown in
//! the modal) is derived on demand. All operations here are total:
//! missing records, malformed links and unrecognized stored
//! preferences degrade to a safe default instead of failing.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{Catalog, FilterState, ModalState};
//!
//! let catalog = Catalog::builtin();
//!
//! let mut filter = FilterState::new(&catalog);
//! filter.select("Web");
//! let visible = catalog.filter(filter.selected());
//!
//! let mut modal = ModalState::default();
//! modal.open(&catalog, visible[0].id);
//! assert!(modal.is_open());
//! modal.close();
//! ```

pub mod catalog;
pub mod error;
pub mod link;
pub mod state;
pub mod text;
pub mod theme;
pub mod types;

// Re-exports
pub use catalog::{Catalog, ALL_CATEGORIES};
pub use error::FolioError;
pub use link::normalize_url;
pub use state::{FilterState, ModalState};
pub use text::{clean_tags, preview, split_tags, tag_labels, DESCRIPTION_PREVIEW_CHARS};
pub use theme::{Theme, ThemeStore};
pub use types::{Project, ProjectId};
