//! Navigation Header Component
//!
//! Desktop: horizontal header with the site title, section links and
//! the theme toggle.
//! Mobile: the links collapse behind a hamburger button (see
//! [`crate::components::MobileMenu`]).

use dioxus::prelude::*;
use folio_core::Theme;

use crate::components::MobileMenu;
use crate::context::use_theme;

/// Page sections the header links to, as (anchor id, label).
///
/// The scroll-spy keeps the link of the section currently in view
/// marked active.
pub const SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Navigation Header component
///
/// - Left: site title
/// - Center: section links (`.menu`, scroll-spy managed)
/// - Right: theme toggle showing ☀ in dark mode, ☾ in light mode,
///   and the hamburger on narrow layouts
#[component]
pub fn NavHeader() -> Element {
    let mut theme = use_theme();
    let mut menu_open = use_signal(|| false);

    let toggle_glyph = match theme.current() {
        Theme::Dark => "\u{2600}",
        Theme::Light => "\u{263E}",
    };

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                div { class: "nav-title",
                    h1 { class: "site-title", "Folio" }
                }

                nav { class: "menu",
                    for (anchor, label) in SECTIONS {
                        a {
                            href: "#{anchor}",
                            class: "menu-link",
                            "{label}"
                        }
                    }
                }

                div { class: "nav-controls",
                    button {
                        id: "themeToggle",
                        class: "theme-toggle",
                        "aria-label": "Toggle color theme",
                        onclick: move |_| theme.toggle(),
                        "{toggle_glyph}"
                    }

                    button {
                        id: "hamburger",
                        class: "hamburger",
                        "aria-label": "Open navigation menu",
                        "aria-expanded": "{menu_open()}",
                        onclick: move |_| menu_open.set(!menu_open()),
                        "\u{2630}"
                    }
                }
            }
        }

        MobileMenu {
            open: menu_open(),
            on_navigate: move |_| menu_open.set(false),
        }
    }
}
