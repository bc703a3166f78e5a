//! Preference Source
//!
//! String-keyed option lookups with caller-supplied defaults, plus key-ordered
//! enumeration for the diagnostic dump. The bundled [`FilePreferences`] reads
//! a JSON object from the platform config directory:
//!
//! - Linux: `~/.config/mediakey/prefs.json`
//! - Windows: `%APPDATA%\mediakey\prefs.json`
//! - macOS: `~/Library/Application Support/mediakey/prefs.json`

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::{error, info};

/// Key-value option store the patch reads its configuration from
pub trait PreferenceSource {
    /// Boolean option lookup; `default` applies when the key is absent or not
    /// a boolean
    fn bool_pref(&self, key: &str, default: bool) -> bool;

    /// All entries in key order, values rendered for display
    fn entries(&self) -> Vec<(String, String)>;
}

/// JSON-file-backed preference store
#[derive(Debug, Clone, Default)]
pub struct FilePreferences {
    values: BTreeMap<String, serde_json::Value>,
}

impl FilePreferences {
    /// Load preferences from disk, or return an empty store if missing/corrupt
    pub fn load() -> Self {
        let path = Self::prefs_path();

        if let Some(path) = path {
            if path.exists() {
                match fs::File::open(&path) {
                    Ok(file) => match serde_json::from_reader(file) {
                        Ok(values) => {
                            info!("Preferences loaded from {:?}", path);
                            return Self { values };
                        }
                        Err(e) => {
                            error!("Failed to parse preference file: {}", e);
                        }
                    },
                    Err(e) => {
                        error!("Failed to open preference file: {}", e);
                    }
                }
            }
        }

        info!("Using default preferences");
        Self::default()
    }

    /// Build a store from in-memory values (embedders, tests)
    pub fn from_values(values: BTreeMap<String, serde_json::Value>) -> Self {
        Self { values }
    }

    /// Set a value, replacing any existing entry
    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.values.insert(key.into(), value);
    }

    fn prefs_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "mediakey", "mediakey")
            .map(|proj| proj.config_dir().join("prefs.json"))
    }
}

impl PreferenceSource for FilePreferences {
    fn bool_pref(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(serde_json::Value::Bool(value)) => *value,
            _ => default,
        }
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect()
    }
}
