//! Core crate for the Skytray weather tray application.
//!
//! Provides configuration loading/persistence, the string-keyed settings
//! store used by the weather service, and tracing initialization.

pub mod config;
pub mod error;
pub mod settings;

pub use config::{Config, ProviderKind, WeatherConfig};
pub use error::ConfigError;
pub use settings::{FileSettings, MemorySettings, SettingsStore, WEATHER_LOCATION_KEY};

use anyhow::Result;

/// Initialize tracing for the application.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Skytray core initialized");
    Ok(())
}
