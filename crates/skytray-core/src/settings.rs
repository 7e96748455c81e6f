//! String-keyed settings store backing the weather service.
//!
//! The weather service reads and writes a single key (the default
//! location), but the store is a generic key/value map so the frontend can
//! keep arbitrary custom settings alongside it.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::config::Config;
use crate::error::ConfigError;

/// Settings key holding the default weather location.
pub const WEATHER_LOCATION_KEY: &str = "weatherLocation";

/// String-keyed settings map with typed accessors.
pub trait SettingsStore: Send + Sync {
    /// Fetch a setting, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<toml::Value>, ConfigError>;

    /// Store a setting, replacing any previous value.
    fn set(&self, key: &str, value: toml::Value) -> Result<(), ConfigError>;

    /// Fetch a setting that must be a string.
    ///
    /// A present value of any other type is a [`ConfigError::TypeMismatch`]
    /// rather than a silent coercion.
    fn get_string(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match self.get(key)? {
            None => Ok(None),
            Some(toml::Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "string",
            }),
        }
    }
}

/// Settings store persisted through the TOML config file.
///
/// Each access round-trips through disk, matching the config file being the
/// single source of truth; there is no in-memory cache to go stale.
#[derive(Debug)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    /// Store backed by the default config path.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            path: Config::config_path()?,
        })
    }

    /// Store backed by an explicit config file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for FileSettings {
    fn get(&self, key: &str) -> Result<Option<toml::Value>, ConfigError> {
        let config = Config::load_from(&self.path)?;
        Ok(config.settings.get(key).cloned())
    }

    fn set(&self, key: &str, value: toml::Value) -> Result<(), ConfigError> {
        let mut config = Config::load_from(&self.path)?;
        config.settings.insert(key.to_string(), value);
        config.save_to(&self.path)
    }
}

/// In-memory settings store for simulated runs and tests.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: Mutex<HashMap<String, toml::Value>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a default location.
    pub fn with_location(location: &str) -> Self {
        let store = Self::new();
        {
            let mut values = store.values.lock().unwrap_or_else(|e| e.into_inner());
            values.insert(
                WEATHER_LOCATION_KEY.to_string(),
                toml::Value::String(location.to_string()),
            );
        }
        store
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Result<Option<toml::Value>, ConfigError> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: toml::Value) -> Result<(), ConfigError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value);
        Ok(())
    }
}
