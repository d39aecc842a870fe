//! Core types for Folio

use serde::{Deserialize, Serialize};

/// Unique identifier for a project in the catalog
///
/// Ids are assigned in the static data set and stay stable across
/// renders, so a card only needs to carry its id for the modal to
/// recover the full record from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "project_{}", self.0)
    }
}

/// One portfolio entry.
///
/// `category` is a free-form grouping key, not a closed enum; the
/// filter bar derives its buttons from whatever categories the
/// catalog happens to contain. `image`, `live_url` and `repo_url`
/// may be empty or relative; rendering runs them through
/// [`crate::link::normalize_url`] before emitting a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub repo_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_id_display() {
        assert_eq!(ProjectId(3).to_string(), "project_3");
    }

    #[test]
    fn project_deserializes_with_missing_optional_fields() {
        let p: Project = serde_json::from_str(
            r#"{"id": 7, "title": "Demo", "category": "Web", "description": "d"}"#,
        )
        .unwrap();
        assert_eq!(p.id, ProjectId(7));
        assert!(p.image.is_empty());
        assert!(p.tags.is_empty());
        assert!(p.live_url.is_empty());
        assert!(p.repo_url.is_empty());
    }
}
