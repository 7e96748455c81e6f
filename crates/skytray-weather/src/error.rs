use skytray_core::ConfigError;
use thiserror::Error;

/// Weather acquisition errors.
///
/// A failed acquisition aborts the whole cycle; no partial snapshot is
/// ever returned.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The geocoding endpoint returned zero matches.
    #[error("no geocoding match for location '{0}'")]
    Lookup(String),

    /// Transport failure or non-success HTTP status.
    #[error("weather request failed: {0}")]
    Fetch(String),

    /// Malformed response body.
    #[error("malformed weather response: {0}")]
    Parse(String),

    /// Settings store failure (e.g. a stored location of the wrong type).
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            WeatherError::Parse(err.to_string())
        } else {
            WeatherError::Fetch(err.to_string())
        }
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Parse(err.to_string())
    }
}
