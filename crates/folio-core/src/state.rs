//! Filter and modal state machines.
//!
//! Both are plain values the UI layer keeps inside signals; all
//! transitions are synchronous and total.

use crate::catalog::{Catalog, ALL_CATEGORIES};
use crate::types::{Project, ProjectId};

/// The currently selected filter category.
///
/// Exactly one category is active at any time. Selecting a label the
/// catalog does not know is a no-op, so the active label always comes
/// from the derived category list.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    categories: Vec<String>,
    selected: String,
}

impl FilterState {
    /// Derive the category list from the catalog and start on the
    /// wildcard.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            categories: catalog.categories(),
            selected: ALL_CATEGORIES.to_string(),
        }
    }

    /// The derived category labels, wildcard first.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The single active label.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Activate a label. Returns true when the selection changed.
    pub fn select(&mut self, label: &str) -> bool {
        if self.selected == label || !self.categories.iter().any(|c| c == label) {
            return false;
        }
        self.selected = label.to_string();
        true
    }
}

/// Whether the project modal is open, and on which record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ProjectId),
}

impl ModalState {
    /// Open on a record. No transition happens when the id does not
    /// resolve against the catalog.
    pub fn open(&mut self, catalog: &Catalog, id: ProjectId) {
        if catalog.get(id).is_some() {
            *self = ModalState::Open(id);
        }
    }

    /// Close the modal. Idempotent.
    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    /// Resolve the displayed record, if any.
    ///
    /// Returns `None` when closed or when the id no longer resolves.
    pub fn project<'a>(&self, catalog: &'a Catalog) -> Option<&'a Project> {
        match self {
            ModalState::Closed => None,
            ModalState::Open(id) => catalog.get(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_starts_on_the_wildcard() {
        let catalog = Catalog::builtin();
        let filter = FilterState::new(&catalog);
        assert_eq!(filter.selected(), ALL_CATEGORIES);
        assert_eq!(filter.categories()[0], ALL_CATEGORIES);
    }

    #[test]
    fn exactly_one_label_is_active_after_any_selection_sequence() {
        let catalog = Catalog::builtin();
        let mut filter = FilterState::new(&catalog);

        for label in ["Web", "Web", "Nope", "UI", "", "JavaScript", "All"] {
            filter.select(label);
            let active: Vec<&String> = filter
                .categories()
                .iter()
                .filter(|c| *c == filter.selected())
                .collect();
            assert_eq!(active.len(), 1, "after selecting {label:?}");
        }
    }

    #[test]
    fn selecting_an_unknown_label_is_a_noop() {
        let catalog = Catalog::builtin();
        let mut filter = FilterState::new(&catalog);
        filter.select("Web");
        assert!(!filter.select("Embedded"));
        assert_eq!(filter.selected(), "Web");
    }

    #[test]
    fn modal_open_requires_a_known_record() {
        let catalog = Catalog::builtin();
        let mut modal = ModalState::default();

        modal.open(&catalog, ProjectId(99));
        assert!(!modal.is_open());

        modal.open(&catalog, ProjectId(3));
        assert!(modal.is_open());
        assert_eq!(modal.project(&catalog).unwrap().id, ProjectId(3));
    }

    #[test]
    fn reopening_shows_only_the_second_record() {
        let catalog = Catalog::builtin();
        let mut modal = ModalState::default();

        modal.open(&catalog, ProjectId(3));
        modal.close();
        modal.open(&catalog, ProjectId(6));

        let shown = modal.project(&catalog).unwrap();
        assert_eq!(shown.id, ProjectId(6));
        assert_eq!(shown.title, "JS Mini Apps");
        assert!(!shown.tags.contains(&"UI".to_string()));
    }

    #[test]
    fn close_is_idempotent() {
        let catalog = Catalog::builtin();
        let mut modal = ModalState::default();
        modal.open(&catalog, ProjectId(1));
        modal.close();
        modal.close();
        assert_eq!(modal, ModalState::Closed);
        assert!(modal.project(&catalog).is_none());
    }
}
