//! Scroll-To-Top Component
//!
//! Floating button that appears once the page is scrolled past a
//! threshold (the page-level scroll effects toggle its `show` class)
//! and smooth-scrolls back to the top when activated.

use dioxus::document;
use dioxus::prelude::*;

#[component]
pub fn ScrollTopButton() -> Element {
    rsx! {
        button {
            id: "scrollTopBtn",
            class: "scroll-top",
            "aria-label": "Scroll back to top",
            onclick: move |_| {
                document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
            },
            "\u{2191}"
        }
    }
}
