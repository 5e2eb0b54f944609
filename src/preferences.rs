//! The persisted display preference (dark mode).
//!
//! Preferences live in a small JSON object on disk, the terminal counterpart of
//! browser local storage. [`ThemePreference`] reads its flag once when loaded
//! and writes it back on every change.

use std::fs;
use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::PreferenceError;

pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Missing or unreadable files read as empty.
    fn read_all(&self) -> Map<String, Value> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                debug!("No preferences at {}: {}", self.path.display(), e);
                return Map::new();
            }
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                warn!(
                    "Ignoring malformed preferences file {}",
                    self.path.display()
                );
                Map::new()
            }
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.read_all().get(key).and_then(Value::as_bool)
    }

    pub fn set(&self, key: &str, value: Value) -> Result<(), PreferenceError> {
        let mut all = self.read_all();
        all.insert(key.to_string(), value);
        let body = serde_json::to_string_pretty(&Value::Object(all))?;

        let write_err = |source| PreferenceError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(&self.path, body).map_err(write_err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteMode {
    Light,
    Dark,
}

/// Owner of the dark-mode flag.
#[derive(Debug)]
pub struct ThemePreference {
    store: PreferenceStore,
    dark: bool,
}

impl ThemePreference {
    pub fn load(store: PreferenceStore) -> Self {
        let dark = store.get_bool(DARK_MODE_KEY).unwrap_or(false);
        debug!(dark, "Loaded display preference");
        Self { store, dark }
    }

    pub fn palette_mode(&self) -> PaletteMode {
        if self.dark {
            PaletteMode::Dark
        } else {
            PaletteMode::Light
        }
    }

    pub fn set_dark(&mut self, dark: bool) -> Result<(), PreferenceError> {
        self.dark = dark;
        self.store.set(DARK_MODE_KEY, Value::Bool(dark))
    }

    /// Flips the flag, persists it and returns the new mode.
    pub fn toggle(&mut self) -> Result<PaletteMode, PreferenceError> {
        self.set_dark(!self.dark)?;
        Ok(self.palette_mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let pref = ThemePreference::load(PreferenceStore::new(dir.path().join("prefs.json")));
        assert_eq!(pref.palette_mode(), PaletteMode::Light);
    }

    #[test]
    fn toggle_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut pref = ThemePreference::load(PreferenceStore::new(&path));
        assert_eq!(pref.toggle().unwrap(), PaletteMode::Dark);

        let reloaded = ThemePreference::load(PreferenceStore::new(&path));
        assert_eq!(reloaded.palette_mode(), PaletteMode::Dark);

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw[DARK_MODE_KEY], Value::Bool(true));
    }

    #[test]
    fn other_keys_survive_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"pageSize": 20}"#).unwrap();

        let mut pref = ThemePreference::load(PreferenceStore::new(&path));
        pref.set_dark(true).unwrap();

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["pageSize"], 20);
        assert_eq!(raw[DARK_MODE_KEY], true);
    }

    #[test]
    fn malformed_file_reads_as_light() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();
        let pref = ThemePreference::load(PreferenceStore::new(&path));
        assert_eq!(pref.palette_mode(), PaletteMode::Light);
    }
}
