//! Mobile Menu Component
//!
//! Vertical section links shown behind the hamburger on narrow
//! layouts. Choosing a link closes the menu.

use dioxus::prelude::*;

use crate::components::nav_header::SECTIONS;

#[derive(Props, Clone, PartialEq)]
pub struct MobileMenuProps {
    /// Whether the menu is expanded
    pub open: bool,
    /// Callback when a link is chosen (the header collapses the menu)
    pub on_navigate: EventHandler<()>,
}

/// Mobile navigation menu
#[component]
pub fn MobileMenu(props: MobileMenuProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    rsx! {
        nav { id: "mobileMenu", class: "mobile-menu",
            for (anchor, label) in SECTIONS {
                a {
                    href: "#{anchor}",
                    class: "mobile-menu-link",
                    onclick: move |_| props.on_navigate.call(()),
                    "{label}"
                }
            }
        }
    }
}
