//! Weather service: provider plus settings-store glue.
//!
//! Resolves the default location for empty requests and persists location
//! changes before refreshing, so the tray always reflects the stored
//! default.

use std::sync::Arc;

use skytray_core::{ConfigError, SettingsStore, WEATHER_LOCATION_KEY};

use crate::error::WeatherError;
use crate::provider::WeatherProvider;
use crate::types::WeatherSnapshot;

/// Hardcoded fallback when no default location is stored.
pub const DEFAULT_LOCATION: &str = "New York";

pub struct WeatherService {
    provider: Box<dyn WeatherProvider>,
    settings: Arc<dyn SettingsStore>,
}

impl WeatherService {
    pub fn new(provider: Box<dyn WeatherProvider>, settings: Arc<dyn SettingsStore>) -> Self {
        Self { provider, settings }
    }

    /// Acquire a snapshot for `location`; an empty name resolves the
    /// stored default first.
    pub async fn get_weather(&self, location: &str) -> Result<WeatherSnapshot, WeatherError> {
        let location = if location.is_empty() {
            self.stored_location()?
        } else {
            location.to_string()
        };

        self.provider.acquire(&location).await
    }

    /// The effective default location.
    ///
    /// An absent key or an unreadable store falls back to
    /// [`DEFAULT_LOCATION`]; a stored value of the wrong type is a typed
    /// error rather than a silent coercion.
    pub fn stored_location(&self) -> Result<String, WeatherError> {
        match self.settings.get_string(WEATHER_LOCATION_KEY) {
            Ok(Some(location)) if !location.is_empty() => Ok(location),
            Ok(_) => Ok(DEFAULT_LOCATION.to_string()),
            Err(err @ ConfigError::TypeMismatch { .. }) => Err(err.into()),
            Err(err) => {
                tracing::warn!("Settings store unavailable ({err}), using fallback location");
                Ok(DEFAULT_LOCATION.to_string())
            }
        }
    }

    /// Persist a new default location, then re-acquire so the caller can
    /// refresh the tray immediately.
    pub async fn update_location(&self, location: &str) -> Result<WeatherSnapshot, WeatherError> {
        self.settings
            .set(WEATHER_LOCATION_KEY, toml::Value::String(location.to_string()))?;
        tracing::info!("Stored default weather location: {location}");

        self.provider.acquire(location).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Condition;
    use async_trait::async_trait;
    use skytray_core::MemorySettings;
    use std::sync::Mutex;

    /// Provider stub that records the location it was asked for.
    struct StubProvider {
        seen: Mutex<Vec<String>>,
    }

    impl StubProvider {
        fn new() -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn acquire(&self, location: &str) -> Result<WeatherSnapshot, WeatherError> {
            self.seen.lock().unwrap().push(location.to_string());
            Ok(WeatherSnapshot {
                location: location.to_string(),
                temperature: 20.0,
                feels_like: 19.0,
                condition: Condition::ClearSky,
                description: format!("Clear Sky in {location}"),
                humidity: 50,
                wind_speed: 10.0,
                icon: "100".to_string(),
                last_updated: "2026-08-28 12:00:00".to_string(),
                forecast: vec![],
            })
        }
    }

    fn service_with(settings: MemorySettings) -> (WeatherService, Arc<MemorySettings>) {
        let settings = Arc::new(settings);
        let service = WeatherService::new(Box::new(StubProvider::new()), settings.clone());
        (service, settings)
    }

    #[tokio::test]
    async fn test_empty_location_uses_stored_default() {
        let (service, _) = service_with(MemorySettings::with_location("Lisbon"));
        let snapshot = service.get_weather("").await.unwrap();
        assert_eq!(snapshot.location, "Lisbon");
    }

    #[tokio::test]
    async fn test_empty_location_without_store_falls_back() {
        let (service, _) = service_with(MemorySettings::new());
        let snapshot = service.get_weather("").await.unwrap();
        assert_eq!(snapshot.location, DEFAULT_LOCATION);
    }

    #[tokio::test]
    async fn test_explicit_location_skips_store() {
        let (service, _) = service_with(MemorySettings::with_location("Lisbon"));
        let snapshot = service.get_weather("Oslo").await.unwrap();
        assert_eq!(snapshot.location, "Oslo");
    }

    #[tokio::test]
    async fn test_non_string_stored_location_is_typed_error() {
        let settings = MemorySettings::new();
        settings
            .set(WEATHER_LOCATION_KEY, toml::Value::Integer(7))
            .unwrap();
        let (service, _) = service_with(settings);

        let err = service.get_weather("").await.unwrap_err();
        assert!(matches!(
            err,
            WeatherError::Config(ConfigError::TypeMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_location_persists_then_refreshes() {
        let (service, settings) = service_with(MemorySettings::new());

        let snapshot = service.update_location("Tokyo").await.unwrap();

        assert_eq!(snapshot.location, "Tokyo");
        assert_eq!(
            settings.get_string(WEATHER_LOCATION_KEY).unwrap(),
            Some("Tokyo".to_string())
        );
        // And subsequent default lookups use the new location.
        let next = service.get_weather("").await.unwrap();
        assert_eq!(next.location, "Tokyo");
    }
}
