//! UI Components for Folio.

mod filter_bar;
mod project_card;
mod project_gallery;
mod project_modal;

pub use filter_bar::FilterBar;
pub use project_card::ProjectCard;
pub use project_gallery::ProjectGallery;
pub use project_modal::ProjectModal;
