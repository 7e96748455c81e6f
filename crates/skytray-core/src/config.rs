use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::settings::WEATHER_LOCATION_KEY;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Weather provider strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Live Open-Meteo API.
    #[default]
    Live,
    /// Deterministic synthetic data, no network.
    Simulated,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Which weather provider implementation to construct.
    pub provider: ProviderKind,

    /// Tray refresh interval in minutes
    pub refresh_minutes: u32,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Live,
            refresh_minutes: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI theme name
    pub theme: String,

    /// Language code sent to the geocoding API
    pub language: String,

    /// Window width
    pub window_width: u32,

    /// Window height
    pub window_height: u32,

    /// Weather settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Free-form custom settings (string-keyed).
    /// Holds e.g. the default weather location.
    #[serde(default)]
    pub settings: HashMap<String, toml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        let mut settings = HashMap::new();
        settings.insert(
            WEATHER_LOCATION_KEY.to_string(),
            toml::Value::String("New York".to_string()),
        );

        Self {
            theme: "light".to_string(),
            language: "en".to_string(),
            window_width: 400,
            window_height: 600,
            weather: WeatherConfig::default(),
            settings,
        }
    }
}

impl Config {
    /// Load configuration from the default path, creating it if absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, creating it if absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.window_width == 0 {
            result.add_error("window_width", "Window width must be greater than 0");
        }
        if self.window_height == 0 {
            result.add_error("window_height", "Window height must be greater than 0");
        }

        if self.weather.refresh_minutes == 0 {
            result.add_warning("weather.refresh_minutes", "Tray refresh disabled (0 minutes)");
        } else if self.weather.refresh_minutes > 1440 {
            result.add_warning(
                "weather.refresh_minutes",
                "Tray refresh interval is more than 24 hours",
            );
        }

        if self.language.is_empty() {
            result.add_warning("language", "Empty language code, geocoding will use 'en'");
        }

        result
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("skytray");

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid(), "default config should be valid: {:?}", result.errors);
    }

    #[test]
    fn test_default_config_seeds_location() {
        let config = Config::default();
        let value = config.settings.get(WEATHER_LOCATION_KEY);
        assert_eq!(
            value,
            Some(&toml::Value::String("New York".to_string()))
        );
    }

    #[test]
    fn test_zero_window_dimensions() {
        let mut config = Config::default();
        config.window_width = 0;
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "window_width"));
    }

    #[test]
    fn test_zero_refresh_is_warning() {
        let mut config = Config::default();
        config.weather.refresh_minutes = 0;
        let result = config.validate();
        assert!(result.is_valid());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.field == "weather.refresh_minutes"));
    }

    #[test]
    fn test_load_creates_default_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skytray").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, "light");
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.weather.refresh_minutes = 42;
        config.settings.insert(
            "weatherLocation".to_string(),
            toml::Value::String("Tokyo".to_string()),
        );
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.weather.refresh_minutes, 42);
        assert_eq!(
            reloaded.settings.get("weatherLocation"),
            Some(&toml::Value::String("Tokyo".to_string()))
        );
    }

    #[test]
    fn test_provider_kind_round_trips_lowercase() {
        let toml_str = "provider = \"simulated\"\nrefresh_minutes = 5\n";
        let weather: WeatherConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(weather.provider, ProviderKind::Simulated);
    }
}
