use std::sync::Arc;

use dioxus::prelude::*;

use crate::bootstrap;
use crate::context::{SharedCatalog, ThemeController};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the catalog, and the theme controller.
/// Folio is a single page, so there is no router; `Home` renders the
/// whole portfolio.
#[component]
pub fn App() -> Element {
    let boot = bootstrap();

    let catalog: SharedCatalog = Arc::new(boot.catalog.clone());
    use_context_provider(|| catalog);

    let theme = use_signal(|| boot.initial_theme);
    let store = use_signal(|| boot.theme_store.clone());
    let controller = use_context_provider(|| ThemeController::new(theme, store));

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "app {controller.current()}",
            Home {}
        }
    }
}
