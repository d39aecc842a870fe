//! Project Modal Component
//!
//! Detail view for one project record: full description, tag list,
//! live and repository links.

use dioxus::document;
use dioxus::prelude::*;
use folio_core::{normalize_url, tag_labels, Project};

/// Document-level Escape listener. A keydown can target anywhere
/// (the body after a content click, the card button that opened the
/// modal), so the listener lives on the document rather than the
/// overlay and reports back over the eval channel.
const ESCAPE_LISTENER_JS: &str = r#"
if (!window.__folioModalEscape) {
    window.__folioModalEscape = (e) => {
        if (e.key === 'Escape') dioxus.send(true);
    };
    document.addEventListener('keydown', window.__folioModalEscape);
}
"#;

const ESCAPE_CLEANUP_JS: &str = r#"
if (window.__folioModalEscape) {
    document.removeEventListener('keydown', window.__folioModalEscape);
    window.__folioModalEscape = null;
}
"#;

#[derive(Clone, PartialEq, Props)]
pub struct ProjectModalProps {
    /// The record to display, resolved by the caller from ModalState
    pub project: Project,
    /// Handler called for every closing trigger
    pub on_close: EventHandler<()>,
}

/// Modal dialog showing the full record
///
/// The parent renders this component only while `ModalState` is
/// open, so mount/unmount mirror the open/close transitions exactly.
/// Background scroll is suppressed for the modal's lifetime.
///
/// Closing triggers, all routed through `on_close`:
/// - the explicit close button
/// - a click landing on the overlay itself (content clicks stop
///   propagation)
/// - the Escape key, wherever focus happens to be
#[component]
pub fn ProjectModal(props: ProjectModalProps) -> Element {
    let project = props.project;
    let live_url = normalize_url(&project.live_url);
    let repo_url = normalize_url(&project.repo_url);
    let tags = tag_labels(&project.tags);

    // Suppress background scroll and install the Escape listener
    // while open; both are undone when the modal unmounts.
    use_effect(move || {
        document::eval("document.body.style.overflow = 'hidden';");
        let on_close = props.on_close;
        spawn(async move {
            let mut escape = document::eval(ESCAPE_LISTENER_JS);
            while escape.recv::<bool>().await.is_ok() {
                on_close.call(());
            }
        });
    });
    use_drop(|| {
        document::eval(ESCAPE_CLEANUP_JS);
        document::eval("document.body.style.overflow = 'auto';");
    });

    rsx! {
        div {
            id: "modalOverlay",
            class: "modal-overlay active",
            onclick: move |_| props.on_close.call(()),

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                button {
                    id: "modalClose",
                    class: "modal-close",
                    "aria-label": "Close project details",
                    onclick: move |_| props.on_close.call(()),
                    "\u{00d7}"
                }

                img {
                    id: "modalImage",
                    class: "modal-image",
                    src: "{project.image}",
                    alt: "{project.title}",
                }

                h3 { id: "modalTitle", "{project.title}" }
                p { id: "modalDesc", "{project.description}" }

                div { id: "modalTags", class: "modal-tags",
                    for tag in tags.iter() {
                        span { key: "{tag}", "{tag}" }
                    }
                }

                div { class: "modal-actions",
                    a {
                        id: "modalLive",
                        class: "btn btn-primary",
                        href: "{live_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Live Demo"
                    }
                    a {
                        id: "modalGit",
                        class: "btn btn-outline",
                        href: "{repo_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Source"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Escape has to close the modal no matter where keyboard focus
    /// sits (a content click parks it on the body), so the listener
    /// must attach to the document, not the overlay subtree.
    #[test]
    fn escape_listener_attaches_at_document_level() {
        assert!(ESCAPE_LISTENER_JS.contains("document.addEventListener('keydown'"));
        assert!(ESCAPE_LISTENER_JS.contains("'Escape'"));
    }

    #[test]
    fn escape_listener_is_removed_on_unmount() {
        assert!(ESCAPE_CLEANUP_JS.contains("document.removeEventListener('keydown'"));
        assert!(ESCAPE_CLEANUP_JS.contains("window.__folioModalEscape = null"));
    }
}
