//! Light/dark theme selection and the preference store behind it.
//!
//! The stored value is read once when [`ThemeSettings`] is built and written
//! back on every toggle. Writes are best-effort: a failed write is logged
//! and the page keeps the new theme for the rest of the session.

use std::fs;
use std::path::{Path, PathBuf};

use raylib::prelude::Color;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::constants::THEME_KEY;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// A stored "light" selects the light theme, anything else is dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::new(18, 20, 33, 255),
                surface: Color::new(30, 33, 52, 255),
                text: Color::new(232, 234, 246, 255),
                muted: Color::new(149, 158, 203, 255),
                accent: Color::new(124, 142, 231, 255),
                border: Color::new(58, 63, 94, 255),
                badge: Color::new(47, 54, 92, 255),
            },
            Theme::Light => Palette {
                background: Color::new(245, 246, 252, 255),
                surface: Color::new(255, 255, 255, 255),
                text: Color::new(28, 31, 48, 255),
                muted: Color::new(96, 104, 148, 255),
                accent: Color::new(124, 142, 231, 255),
                border: Color::new(214, 218, 238, 255),
                badge: Color::new(226, 230, 250, 255),
            },
        }
    }
}

/// Colors used to paint one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub badge: Color,
}

/// Where the theme preference lives between runs.
pub trait PreferenceStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, value: &str) -> Result<()>;
}

/// Keeps the preference in memory only.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn new(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self, value: &str) -> Result<()> {
        self.value = Some(value.to_string());
        Ok(())
    }
}

/// JSON object of string keys on disk; one key holds the theme.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    key: String,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: THEME_KEY.to_string(),
        }
    }

    /// `<config dir>/portfolio/preferences.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("portfolio").join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whole JSON object; values of other keys may have any JSON type.
    fn read_entries(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self) -> Option<String> {
        match self.read_entries() {
            Ok(entries) => entries
                .get(&self.key)
                .and_then(Value::as_str)
                .map(str::to_string),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable preference file");
                None
            }
        }
    }

    fn set(&mut self, value: &str) -> Result<()> {
        // Keep unrelated keys; start over if the file is corrupt.
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(self.key.clone(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::Preference(format!("cannot create {}: {e}", parent.display()))
                })?;
            }
        }
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Current theme plus the store it is persisted to.
pub struct ThemeSettings {
    store: Box<dyn PreferenceStore>,
    theme: Theme,
}

impl ThemeSettings {
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let theme = Theme::from_stored(store.get().as_deref());
        debug!(theme = theme.as_str(), "theme loaded");
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.set(self.theme.as_str()) {
            warn!(error = %e, "failed to persist theme preference");
        }
        self.theme
    }
}

impl std::fmt::Debug for ThemeSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeSettings")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self) -> Option<String> {
            Some("light".to_string())
        }

        fn set(&mut self, _value: &str) -> Result<()> {
            Err(Error::Preference("read-only".to_string()))
        }
    }

    #[test]
    fn only_light_selects_light() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
        assert_eq!(Theme::from_stored(None), Theme::Dark);
    }

    #[test]
    fn toggle_writes_through_store() {
        let mut settings = ThemeSettings::load(Box::new(MemoryStore::new(None)));
        assert!(settings.is_dark());

        assert_eq!(settings.toggle(), Theme::Light);
        assert_eq!(settings.store.get().as_deref(), Some("light"));

        assert_eq!(settings.toggle(), Theme::Dark);
        assert_eq!(settings.store.get().as_deref(), Some("dark"));
    }

    #[test]
    fn failed_write_still_flips_theme() {
        let mut settings = ThemeSettings::load(Box::new(FailingStore));
        assert_eq!(settings.theme(), Theme::Light);
        assert_eq!(settings.toggle(), Theme::Dark);
    }

    #[test]
    fn json_store_round_trips_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"volume": "7"}"#).unwrap();

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.get(), None);
        store.set("light").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get().as_deref(), Some("light"));

        let raw: Map<String, Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw.get("volume").and_then(Value::as_str), Some("7"));
    }

    #[test]
    fn json_store_tolerates_non_string_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"volume": 7, "muted": false, "theme": "light"}"#).unwrap();

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.get().as_deref(), Some("light"));
        let settings = ThemeSettings::load(Box::new(store.clone()));
        assert_eq!(settings.theme(), Theme::Light);

        store.set("dark").unwrap();
        let raw: Map<String, Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw.get("theme"), Some(&Value::from("dark")));
        assert_eq!(raw.get("volume"), Some(&Value::from(7)));
        assert_eq!(raw.get("muted"), Some(&Value::Bool(false)));
    }

    #[test]
    fn non_string_theme_reads_as_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"theme": 1}"#).unwrap();
        assert_eq!(JsonFileStore::new(&path).get(), None);
    }

    #[test]
    fn json_store_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("prefs.json");
        let mut store = JsonFileStore::new(&path);
        store.set("dark").unwrap();
        assert_eq!(store.get().as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_file_reads_as_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.get(), None);
        store.set("light").unwrap();
        assert_eq!(store.get().as_deref(), Some("light"));
    }
}
