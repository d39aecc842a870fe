//! The project catalog.
//!
//! An immutable, ordered collection of [`Project`] records built once
//! at startup. Filtering and category derivation never mutate it;
//! they only borrow subsets.

use std::path::Path;

use crate::error::FolioError;
use crate::types::{Project, ProjectId};

/// Label of the synthetic filter option selecting the whole catalog
pub const ALL_CATEGORIES: &str = "All";

/// Immutable ordered collection of projects, the single source of
/// truth for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog, validating the invariants the rest of the
    /// system relies on: ids are unique and every record has a
    /// non-empty category.
    pub fn new(projects: Vec<Project>) -> Result<Self, FolioError> {
        let mut seen = std::collections::HashSet::new();
        for p in &projects {
            if !seen.insert(p.id) {
                return Err(FolioError::DuplicateProjectId(p.id.0));
            }
            if p.category.trim().is_empty() {
                return Err(FolioError::EmptyCategory(p.id.0));
            }
        }
        Ok(Self { projects })
    }

    /// Load a catalog from a JSON file (an array of project records).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FolioError> {
        let raw = std::fs::read_to_string(path)?;
        let projects: Vec<Project> = serde_json::from_str(&raw)?;
        Self::new(projects)
    }

    /// Look up a record by id.
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Iterate records in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Distinct categories present in the catalog, prefixed with the
    /// [`ALL_CATEGORIES`] wildcard, in first-occurrence order.
    pub fn categories(&self) -> Vec<String> {
        let mut cats = vec![ALL_CATEGORIES.to_string()];
        for p in &self.projects {
            if !cats.iter().any(|c| c == &p.category) {
                cats.push(p.category.clone());
            }
        }
        cats
    }

    /// The subset visible under a filter selection, in catalog order.
    ///
    /// The wildcard selects everything; any other label selects the
    /// records whose category equals it. A label matching nothing
    /// yields an empty list rather than an error.
    pub fn filter(&self, selection: &str) -> Vec<&Project> {
        if selection == ALL_CATEGORIES {
            return self.projects.iter().collect();
        }
        self.projects
            .iter()
            .filter(|p| p.category == selection)
            .collect()
    }

    /// The built-in seed catalog.
    pub fn builtin() -> Self {
        let projects = vec![
            Project {
                id: ProjectId(1),
                title: "E-Commerce Electronics UI".to_string(),
                category: "Web".to_string(),
                description: "Modern e-commerce UI with category filters, product cards and clean responsive layout.".to_string(),
                image: "./images/electro mart.png".to_string(),
                tags: vec!["HTML".into(), "CSS".into(), "JS".into(), "Bootstrap".into()],
                live_url: "https://niroda19gosami.github.io/ElectroMart---Electronics-Store/".to_string(),
                repo_url: "https://github.com/Niroda19Gosami/ElectroMart---Electronics-Store".to_string(),
            },
            Project {
                id: ProjectId(2),
                title: "Portfolio Landing Page".to_string(),
                category: "UI".to_string(),
                description: "Minimal portfolio design with premium typography, smooth scroll and polished sections.".to_string(),
                image: "./images/portfolio-code.png".to_string(),
                tags: vec!["HTML".into(), "CSS".into(), "JavaScript".into()],
                live_url: "https://niroda19gosami.github.io/myproTfolio/".to_string(),
                repo_url: "https://github.com/Niroda19Gosami/myproTfolio".to_string(),
            },
            Project {
                id: ProjectId(3),
                title: "Bengali Weeding".to_string(),
                category: "Web".to_string(),
                description: "Weeding service UI with side navigation, card layout and structured components.".to_string(),
                image: "./images/Bengali-Weeding.png".to_string(),
                tags: vec!["UI".into(), "Frontend".into(), "CSS".into()],
                live_url: "https://niroda19gosami.github.io/THE-Bengali-events--Bengali-weeding/".to_string(),
                repo_url: "https://github.com/Niroda19Gosami/THE-Bengali-events--Bengali-weeding".to_string(),
            },
            Project {
                id: ProjectId(4),
                title: "Restaurant Website".to_string(),
                category: "UI".to_string(),
                description: "Bengali Restaurant website UI with Menu gallery, Add to cart, Place order and Contact section.".to_string(),
                image: "./images/Restrurent.png".to_string(),
                tags: vec!["HTML".into(), "CSS".into()],
                live_url: "https://niroda19gosami.github.io/--BENGALI--CUISINE-RESTRURENT-/".to_string(),
                repo_url: "https://github.com/Niroda19Gosami/--BENGALI--CUISINE-RESTRURENT-".to_string(),
            },
            Project {
                id: ProjectId(5),
                title: "Hotel Booking website".to_string(),
                category: "Web".to_string(),
                description: "Hotel Booking website multi page-UI with Room Menu gallery, reservation, place order and contact section.".to_string(),
                image: "./images/hotel-booking.png".to_string(),
                tags: vec!["HTML".into(), "CSS".into()],
                live_url: "https://niroda19gosami.github.io/HILLWOOD-hoteL-booking-website./".to_string(),
                repo_url: "https://github.com/Niroda19Gosami/HILLWOOD-hoteL-booking-website.".to_string(),
            },
            Project {
                id: ProjectId(6),
                title: "JS Mini Apps".to_string(),
                category: "JavaScript".to_string(),
                description: "Mini apps like Todo, Calculator and Quiz built with DOM manipulation and LocalStorage.".to_string(),
                image: "https://images.unsplash.com/photo-1507238691740-187a5b1d37b8?q=80&w=1200&auto=format&fit=crop".to_string(),
                tags: vec!["JavaScript".into(), "DOM".into(), "LocalStorage".into()],
                live_url: "https://example.com".to_string(),
                repo_url: "https://github.com/".to_string(),
            },
        ];

        Self::new(projects).expect("builtin seed has unique ids and non-empty categories")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, category: &str) -> Project {
        Project {
            id: ProjectId(id),
            title: format!("Project {id}"),
            category: category.to_string(),
            description: String::new(),
            image: String::new(),
            tags: Vec::new(),
            live_url: String::new(),
            repo_url: String::new(),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![record(1, "Web"), record(1, "UI")]).unwrap_err();
        assert!(matches!(err, FolioError::DuplicateProjectId(1)));
    }

    #[test]
    fn empty_category_is_rejected() {
        let err = Catalog::new(vec![record(1, "  ")]).unwrap_err();
        assert!(matches!(err, FolioError::EmptyCategory(1)));
    }

    #[test]
    fn categories_collapse_duplicates_in_first_seen_order() {
        let catalog = Catalog::new(vec![
            record(1, "Web"),
            record(2, "UI"),
            record(3, "Web"),
            record(4, "JavaScript"),
        ])
        .unwrap();
        assert_eq!(catalog.categories(), vec!["All", "Web", "UI", "JavaScript"]);
    }

    #[test]
    fn wildcard_filter_returns_everything_in_order() {
        let catalog = Catalog::builtin();
        let all = catalog.filter(ALL_CATEGORIES);
        assert_eq!(all.len(), catalog.len());
        let ids: Vec<u32> = all.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn category_filter_preserves_catalog_order() {
        let catalog = Catalog::builtin();
        let web = catalog.filter("Web");
        let ids: Vec<u32> = web.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 3, 5]);
        assert!(web.iter().all(|p| p.category == "Web"));
    }

    #[test]
    fn unknown_category_yields_empty_subset() {
        let catalog = Catalog::builtin();
        assert!(catalog.filter("Embedded").is_empty());
    }

    #[test]
    fn get_resolves_known_ids_only() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(ProjectId(3)).unwrap().title, "Bengali Weeding");
        assert!(catalog.get(ProjectId(99)).is_none());
    }

    #[test]
    fn builtin_catalog_has_six_projects() {
        assert_eq!(Catalog::builtin().len(), 6);
    }

    #[test]
    fn builtin_seed_upholds_catalog_invariants() {
        let catalog = Catalog::builtin();
        let mut ids = std::collections::HashSet::new();
        for p in catalog.iter() {
            assert!(ids.insert(p.id), "duplicate id {}", p.id);
            assert!(!p.category.trim().is_empty());
        }
    }
}
