//! Project Card Component
//!
//! Summary representation of one project record in the gallery:
//! thumbnail, title, truncated description, View and Live actions.

use dioxus::prelude::*;
use folio_core::{normalize_url, preview, Project, ProjectId};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    /// The record this card summarizes
    pub project: Project,
    /// Handler called with the record id when View is activated
    pub on_view: EventHandler<ProjectId>,
}

/// One gallery card
///
/// The View button carries only the record id; the modal resolves it
/// against the catalog. The Live link opens the normalized URL in a
/// new browsing context. Cards start hidden under the `reveal` class
/// and become visible through scroll-reveal observation.
#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;
    let id = project.id;
    let live_url = normalize_url(&project.live_url);

    rsx! {
        article {
            class: "project-card reveal",
            div { class: "project-thumb",
                img {
                    src: "{project.image}",
                    alt: "{project.title}",
                }
            }
            div { class: "project-body",
                h3 { "{project.title}" }
                p { {preview(&project.description)} }
                div { class: "project-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| props.on_view.call(id),
                        "View"
                    }
                    a {
                        class: "btn btn-primary",
                        href: "{live_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Live"
                    }
                }
            }
        }
    }
}
