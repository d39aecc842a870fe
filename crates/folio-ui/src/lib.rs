//! Folio UI Components
//!
//! Dioxus components for the portfolio page: the category filter
//! bar, the project card gallery, and the project detail modal.
//!
//! All components are data-in/event-out: they take records from
//! `folio-core` and raise `EventHandler` callbacks, keeping catalog
//! and modal state ownership in the application shell.

pub mod components;

pub use components::*;
