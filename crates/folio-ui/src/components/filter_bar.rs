//! Filter Bar Component
//!
//! Horizontal row of category filter buttons derived from the
//! catalog. Exactly one button is active at a time.

use dioxus::prelude::*;

/// Properties for the FilterBar component
#[derive(Clone, PartialEq, Props)]
pub struct FilterBarProps {
    /// Derived category labels, wildcard first
    pub categories: Vec<String>,
    /// Currently active label
    pub selected: String,
    /// Handler called when a category is activated
    pub on_select: EventHandler<String>,
}

/// Displays the category filter buttons
///
/// Activation is mutually exclusive: the active label lives in the
/// parent's `FilterState`, so marking one button active implicitly
/// deactivates its siblings on the next render.
///
/// # Example
///
/// ```rust,ignore
/// let mut filter = use_signal(|| FilterState::new(&catalog));
///
/// rsx! {
///     FilterBar {
///         categories: filter().categories().to_vec(),
///         selected: filter().selected().to_string(),
///         on_select: move |label: String| {
///             filter.write().select(&label);
///         }
///     }
/// }
/// ```
#[component]
pub fn FilterBar(props: FilterBarProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "filter-bar",
            role: "radiogroup",
            "aria-label": "Project category filter",
            for cat in props.categories.iter() {
                {
                    let cat_clone = cat.clone();
                    let is_selected = selected == *cat;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            class: if is_selected { "filter-btn active" } else { "filter-btn" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| {
                                on_select.call(cat_clone.clone());
                            },
                            "{cat}"
                        }
                    }
                }
            }
        }
    }
}
