//! Theme styling for Folio.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
