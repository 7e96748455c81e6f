//! Weather provider abstraction.
//!
//! Two interchangeable strategies implement the same contract: the live
//! Open-Meteo client and a deterministic simulated source. The strategy is
//! chosen once at construction, not branched at call sites.

use async_trait::async_trait;
use skytray_core::ProviderKind;

use crate::error::WeatherError;
use crate::types::WeatherSnapshot;

pub mod open_meteo;
pub mod simulated;

use open_meteo::OpenMeteoProvider;
use simulated::SimulatedProvider;

/// A source of weather snapshots.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Produce a fresh snapshot for a non-empty location name.
    async fn acquire(&self, location: &str) -> Result<WeatherSnapshot, WeatherError>;
}

/// Construct the provider selected by config.
pub fn provider_for(
    kind: ProviderKind,
    language: &str,
) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let boxed: Box<dyn WeatherProvider> = match kind {
        ProviderKind::Live => Box::new(OpenMeteoProvider::new(language)?),
        ProviderKind::Simulated => Box::new(SimulatedProvider::new()),
    };

    Ok(boxed)
}
