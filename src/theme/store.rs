//! Durable storage for client preferences

use indexmap::IndexMap;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::ThemeError;

/// Key the active theme is saved under
pub const THEME_KEY: &str = "theme";

/// File name of the preferences file inside the state directory
const PREFERENCES_FILE: &str = "preferences.json";

/// String key/value storage that survives restarts
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Process-local store, mostly useful in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds one value
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a JSON object on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store using the standard file name inside `state_dir`
    pub fn in_dir<P: AsRef<Path>>(state_dir: P) -> Self {
        Self::new(state_dir.as_ref().join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<IndexMap<String, serde_json::Value>, ThemeError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(IndexMap::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&content) {
            Ok(values) => Ok(values),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse preferences {:?}: {}. Using defaults.",
                    self.path,
                    e
                );
                Ok(IndexMap::new())
            }
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        match self.read_all()?.shift_remove(key) {
            Some(serde_json::Value::String(value)) => Ok(Some(value)),
            Some(other) => {
                tracing::warn!("Preference {} is not a string: {}", key, other);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), serde_json::Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        tracing::debug!("Saved preference {} = {} to {:?}", key, value, self.path);
        Ok(())
    }
}
