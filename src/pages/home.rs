//! Home page - the whole portfolio.
//!
//! Hero, about, filterable project gallery with the detail modal,
//! contact form and footer, in one scrollable column.

use dioxus::document;
use dioxus::prelude::*;
use folio_core::{FilterState, ModalState, Project, ProjectId};
use folio_ui::{FilterBar, ProjectGallery, ProjectModal};

use crate::components::{ContactForm, Footer, NavHeader, ScrollTopButton};
use crate::context::use_catalog;

/// Page-level scroll effects, installed once per webview:
/// - the scroll-to-top button shows past 450px
/// - the nav link of the section in view gets the `active` class
const SCROLL_EFFECTS_JS: &str = r#"
(function () {
    if (window.__folioScrollEffects) return;
    window.__folioScrollEffects = true;

    const btn = document.getElementById('scrollTopBtn');
    const sections = document.querySelectorAll('section[id]');
    const links = document.querySelectorAll('.menu a');

    window.addEventListener('scroll', () => {
        if (btn) btn.classList.toggle('show', window.scrollY > 450);

        let currentId = '';
        sections.forEach((sec) => {
            const top = sec.offsetTop - 110;
            if (window.scrollY >= top && window.scrollY < top + sec.offsetHeight) {
                currentId = sec.id;
            }
        });
        links.forEach((link) => {
            link.classList.toggle('active', link.getAttribute('href') === '#' + currentId);
        });
    });
})();
"#;

/// Home page component.
#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();
    let mut filter = use_signal({
        let catalog = catalog.clone();
        move || FilterState::new(&catalog)
    });
    let mut modal = use_signal(ModalState::default);

    use_effect(|| {
        document::eval(SCROLL_EFFECTS_JS);
    });

    // The visible subset, recomputed from the immutable catalog on
    // every selection change.
    let visible: Vec<Project> = catalog
        .filter(filter.read().selected())
        .into_iter()
        .cloned()
        .collect();

    let catalog_for_view = catalog.clone();
    let on_view = move |id: ProjectId| {
        modal.write().open(&catalog_for_view, id);
        tracing::debug!(%id, "Project modal opened");
    };

    let open_project: Option<Project> = modal.read().project(&catalog).cloned();

    let on_select = move |label: String| {
        if filter.write().select(&label) {
            tracing::debug!(category = %label, "Filter selected");
        }
    };

    rsx! {
        NavHeader {}

        main {
            section { id: "home", class: "hero",
                h2 { class: "hero-title", "Hi, I build things for the web." }
                p { class: "hero-subtitle",
                    "Front-end projects, UI experiments and small JavaScript apps."
                }
                a { class: "btn btn-primary", href: "#projects", "See my work" }
            }

            section { id: "about", class: "about",
                h2 { class: "section-title", "About" }
                p {
                    "I design and build responsive interfaces with a focus on "
                    "clean layout, small details and fast load times. The "
                    "gallery below is filterable by category; open any card "
                    "for the full story."
                }
            }

            section { id: "projects", class: "projects",
                h2 { class: "section-title", "Projects" }

                FilterBar {
                    categories: filter.read().categories().to_vec(),
                    selected: filter.read().selected().to_string(),
                    on_select: on_select,
                }

                ProjectGallery {
                    projects: visible,
                    on_view: on_view,
                }
            }

            section { id: "contact", class: "contact",
                h2 { class: "section-title", "Contact" }
                ContactForm {}
            }
        }

        Footer {}
        ScrollTopButton {}

        if let Some(project) = open_project {
            ProjectModal {
                project: project,
                on_close: move |_| modal.write().close(),
            }
        }
    }
}
