//! Theme preference persistence.
//!
//! One small JSON file under the data directory holding the single
//! durable preference: light or dark. Read once at startup, written
//! on every toggle.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// The two display themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = std::convert::Infallible;

    /// Unrecognized values fall back to light, matching the startup
    /// default for an absent preference.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        })
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize)]
struct StoredPreference {
    theme: Theme,
}

/// File-backed store for the theme preference.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store rooted at a data directory; the preference lives in
    /// `theme.json` inside it.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join("theme.json"),
        }
    }

    /// Read the saved preference, defaulting to light when the file
    /// is absent or unreadable.
    pub fn load(&self) -> Theme {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str::<StoredPreference>(&raw) {
                Ok(stored) => stored.theme,
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "Malformed theme preference, using light");
                    Theme::Light
                }
            },
            Err(_) => Theme::Light,
        }
    }

    /// Persist a preference, creating the data directory if needed.
    pub fn save(&self, theme: Theme) -> Result<(), FolioError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&StoredPreference { theme })?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path());
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn saved_preference_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path());
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Theme::Dark);
        store.save(Theme::Light).unwrap();
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn malformed_file_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path());
        std::fs::write(dir.path().join("theme.json"), "{not json").unwrap();
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn unrecognized_stored_value_parses_as_light() {
        assert_eq!("sepia".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("nested").join("deeper"));
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Theme::Dark);
    }
}
