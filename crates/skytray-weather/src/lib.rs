//! Weather acquisition for Skytray
//!
//! Geocodes a place name, fetches current and daily forecast data from
//! Open-Meteo, and normalizes numeric weather codes into the condition
//! vocabulary shared with the icon renderer.

pub mod error;
pub mod provider;
pub mod service;
pub mod types;

pub use error::WeatherError;
pub use provider::open_meteo::OpenMeteoProvider;
pub use provider::simulated::SimulatedProvider;
pub use provider::{provider_for, WeatherProvider};
pub use service::{WeatherService, DEFAULT_LOCATION};
pub use types::{Condition, ForecastDay, WeatherSnapshot};
