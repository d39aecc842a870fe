//! Edge case and boundary condition tests
//!
//! These tests verify the catalog, filter and modal handle unusual
//! inputs and boundary values without faulting.

use folio_core::{Catalog, FilterState, ModalState, Project, ProjectId, ALL_CATEGORIES};

fn record(id: u32, category: &str, description: &str) -> Project {
    Project {
        id: ProjectId(id),
        title: format!("Project {id}"),
        category: category.to_string(),
        description: description.to_string(),
        image: String::new(),
        tags: Vec::new(),
        live_url: String::new(),
        repo_url: String::new(),
    }
}

// ============================================================================
// Empty Catalog Tests
// ============================================================================

/// An empty catalog still derives the wildcard and filters to nothing.
#[test]
fn test_empty_catalog_operations() {
    let catalog = Catalog::new(Vec::new()).unwrap();

    assert!(catalog.is_empty());
    assert_eq!(catalog.categories(), vec![ALL_CATEGORIES]);
    assert!(catalog.filter(ALL_CATEGORIES).is_empty());
    assert!(catalog.filter("Web").is_empty());
    assert!(catalog.get(ProjectId(1)).is_none());
}

/// The filter state over an empty catalog keeps the wildcard active.
#[test]
fn test_filter_state_over_empty_catalog() {
    let catalog = Catalog::new(Vec::new()).unwrap();
    let mut filter = FilterState::new(&catalog);

    assert!(!filter.select("Web"));
    assert_eq!(filter.selected(), ALL_CATEGORIES);
}

/// Opening the modal against an empty catalog never transitions.
#[test]
fn test_modal_over_empty_catalog() {
    let catalog = Catalog::new(Vec::new()).unwrap();
    let mut modal = ModalState::default();

    modal.open(&catalog, ProjectId(1));
    assert!(!modal.is_open());
    modal.close();
    assert_eq!(modal, ModalState::Closed);
}

// ============================================================================
// Category Edge Cases
// ============================================================================

/// A single-category catalog yields exactly wildcard + that category.
#[test]
fn test_single_category_catalog() {
    let catalog = Catalog::new(vec![
        record(1, "Web", "a"),
        record(2, "Web", "b"),
        record(3, "Web", "c"),
    ])
    .unwrap();

    assert_eq!(catalog.categories(), vec!["All", "Web"]);
    assert_eq!(catalog.filter("Web").len(), 3);
}

/// Category comparison is exact: case and whitespace matter.
#[test]
fn test_category_match_is_exact() {
    let catalog = Catalog::new(vec![record(1, "Web", "a")]).unwrap();

    assert!(catalog.filter("web").is_empty());
    assert!(catalog.filter("Web ").is_empty());
    assert_eq!(catalog.filter("Web").len(), 1);
}

/// A category named like the wildcard is shadowed by it: the label
/// "All" always selects the full catalog.
#[test]
fn test_category_literally_named_all_is_shadowed() {
    let catalog = Catalog::new(vec![record(1, "All", "a"), record(2, "Web", "b")]).unwrap();

    // "All" stays deduplicated in the derived list
    assert_eq!(catalog.categories(), vec!["All", "Web"]);
    assert_eq!(catalog.filter("All").len(), 2);
}

// ============================================================================
// Selection Sequences
// ============================================================================

/// Arbitrary selection churn leaves the state on a known label and
/// the derived subset consistent with it.
#[test]
fn test_selection_churn_stays_consistent() {
    let catalog = Catalog::builtin();
    let mut filter = FilterState::new(&catalog);

    let sequence = ["Web", "All", "JavaScript", "JavaScript", "UI", "All", "Web"];
    for label in sequence {
        filter.select(label);
        let visible = catalog.filter(filter.selected());
        if filter.selected() == ALL_CATEGORIES {
            assert_eq!(visible.len(), catalog.len());
        } else {
            assert!(visible.iter().all(|p| p.category == filter.selected()));
        }
    }
    assert_eq!(filter.selected(), "Web");
}

// ============================================================================
// Modal Lifecycle
// ============================================================================

/// Opening over an already-open modal replaces the displayed record.
#[test]
fn test_open_over_open_replaces_record() {
    let catalog = Catalog::builtin();
    let mut modal = ModalState::default();

    modal.open(&catalog, ProjectId(1));
    modal.open(&catalog, ProjectId(2));

    assert_eq!(modal.project(&catalog).unwrap().id, ProjectId(2));
}

/// A failed open leaves a previously opened record in place.
#[test]
fn test_failed_open_keeps_previous_record() {
    let catalog = Catalog::builtin();
    let mut modal = ModalState::default();

    modal.open(&catalog, ProjectId(4));
    modal.open(&catalog, ProjectId(404));

    assert_eq!(modal.project(&catalog).unwrap().id, ProjectId(4));
}
