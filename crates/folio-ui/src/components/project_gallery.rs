//! Project Gallery Component
//!
//! Renders the filtered project list as a card grid and re-registers
//! every card for scroll-reveal after each render.

use dioxus::document;
use dioxus::prelude::*;
use folio_core::{Project, ProjectId};

use crate::components::ProjectCard;

/// Registers gallery cards with an IntersectionObserver (15%
/// visibility threshold); when the observer API is unavailable every
/// card is marked visible immediately instead. Each card reaches the
/// visible state through exactly one of the two paths.
const REVEAL_OBSERVER_JS: &str = r#"
const cards = document.querySelectorAll('#projectsGrid .reveal');
if ('IntersectionObserver' in window) {
    const observer = new IntersectionObserver((entries) => {
        entries.forEach((entry) => {
            if (entry.isIntersecting) entry.target.classList.add('show');
        });
    }, { threshold: 0.15 });
    cards.forEach((el) => observer.observe(el));
} else {
    cards.forEach((el) => el.classList.add('show'));
}
"#;

#[derive(Clone, PartialEq, Props)]
pub struct ProjectGalleryProps {
    /// Records to display, already filtered, in catalog order
    pub projects: Vec<Project>,
    /// Handler called with a record id when a card's View is activated
    pub on_view: EventHandler<ProjectId>,
}

/// The card grid
///
/// Each render fully replaces the grid contents; card bindings and
/// reveal observation are re-established per render, so no stale
/// handler survives a filter change.
#[component]
pub fn ProjectGallery(props: ProjectGalleryProps) -> Element {
    // Re-observe whenever the visible set changes
    let ids: Vec<u32> = props.projects.iter().map(|p| p.id.0).collect();
    use_effect(use_reactive!(|ids| {
        tracing::debug!(cards = ids.len(), "Gallery rendered, registering reveal observer");
        document::eval(REVEAL_OBSERVER_JS);
    }));

    rsx! {
        div {
            id: "projectsGrid",
            class: "projects-grid",
            for project in props.projects.iter() {
                ProjectCard {
                    key: "{project.id}",
                    project: project.clone(),
                    on_view: props.on_view,
                }
            }
        }
    }
}
