#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::{Catalog, Theme, ThemeStore};

/// Startup data resolved once from the command line, shared with the
/// component tree.
pub struct Bootstrap {
    pub catalog: Catalog,
    pub theme_store: ThemeStore,
    pub initial_theme: Theme,
}

static BOOTSTRAP: OnceLock<Bootstrap> = OnceLock::new();

/// Get the startup data (catalog, theme store, initial theme).
pub fn bootstrap() -> &'static Bootstrap {
    BOOTSTRAP.get().expect("bootstrap is set before launch")
}

/// Folio - Personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - filterable portfolio gallery")]
struct Args {
    /// Data directory for the persisted theme preference
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Load the project catalog from a JSON file instead of the
    /// built-in one
    #[arg(short, long)]
    projects: Option<PathBuf>,

    /// Force the initial theme (light|dark), overriding the saved
    /// preference for this session
    #[arg(short, long)]
    theme: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
    });

    let catalog = match args.projects {
        Some(path) => match Catalog::from_json_file(&path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), projects = catalog.len(), "Loaded catalog");
                catalog
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load catalog, using built-in");
                Catalog::builtin()
            }
        },
        None => Catalog::builtin(),
    };

    let theme_store = ThemeStore::new(&data_dir);
    let initial_theme = match args.theme.as_deref() {
        // Infallible: unrecognized values parse as light
        Some(forced) => forced.parse().unwrap_or_default(),
        None => theme_store.load(),
    };

    tracing::info!(
        projects = catalog.len(),
        theme = %initial_theme,
        data_dir = %data_dir.display(),
        "Starting Folio"
    );

    let _ = BOOTSTRAP.set(Bootstrap {
        catalog,
        theme_store,
        initial_theme,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Folio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 850.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
