//! Live weather provider backed by the Open-Meteo APIs.
//!
//! One geocoding request resolves the place name to coordinates, one
//! forecast request fetches current conditions plus six daily entries in
//! the location's own timezone. No retries; a bounded request timeout is
//! the only abort mechanism.

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use crate::error::WeatherError;
use crate::types::{Condition, ForecastDay, WeatherSnapshot};

use super::WeatherProvider;

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const REQUEST_TIMEOUT_SECS: u64 = 10;

const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,wind_speed_10m";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";

/// Requested daily entries; index 0 is today, indices 1..=5 become the
/// five-day forecast.
const FORECAST_DAYS: usize = 6;

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    client: Client,
    language: String,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenMeteoProvider {
    pub fn new(language: &str) -> Result<Self, WeatherError> {
        Self::with_base_urls(language, GEOCODING_URL, FORECAST_URL)
    }

    /// Provider pointed at alternative endpoints (used by tests).
    pub fn with_base_urls(
        language: &str,
        geocoding_url: &str,
        forecast_url: &str,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let language = if language.is_empty() { "en" } else { language };

        Ok(Self {
            client,
            language: language.to_string(),
            geocoding_url: geocoding_url.to_string(),
            forecast_url: forecast_url.to_string(),
        })
    }

    /// Resolve a place name to its best geocoding match.
    async fn geocode(&self, location: &str) -> Result<GeoMatch, WeatherError> {
        let response = self
            .client
            .get(&self.geocoding_url)
            .query(&[
                ("name", location),
                ("count", "1"),
                ("language", self.language.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Fetch(format!(
                "geocoding request returned status {status}"
            )));
        }

        let body = response.text().await?;
        let parsed: GeocodingResponse = serde_json::from_str(&body)?;

        parsed
            .results
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Lookup(location.to_string()))
    }

    async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<ForecastResponse, WeatherError> {
        let response = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", format!("{lat:.4}")),
                ("longitude", format!("{lon:.4}")),
                ("current", CURRENT_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", FORECAST_DAYS.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Fetch(format!(
                "forecast request returned status {status}"
            )));
        }

        let body = response.text().await?;
        let parsed: ForecastResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    #[instrument(skip(self), level = "info")]
    async fn acquire(&self, location: &str) -> Result<WeatherSnapshot, WeatherError> {
        let place = self.geocode(location).await?;
        tracing::debug!(
            "Geocoded '{}' to {} ({}) at {:.4},{:.4}",
            location,
            place.name,
            place.country,
            place.latitude,
            place.longitude
        );

        let payload = self
            .fetch_forecast(place.latitude, place.longitude)
            .await?;

        build_snapshot(location, &payload)
    }
}

/// Assemble the snapshot from a decoded forecast payload.
///
/// The daily series includes today at index 0; the forecast keeps indices
/// 1..=5, each paired with the weekday name of its date.
fn build_snapshot(
    location: &str,
    payload: &ForecastResponse,
) -> Result<WeatherSnapshot, WeatherError> {
    let condition = Condition::from_wmo_code(payload.current.weather_code);

    let days = payload.daily.time.len().min(FORECAST_DAYS);
    let mut forecast = Vec::with_capacity(days.saturating_sub(1));

    for i in 1..days {
        let date = &payload.daily.time[i];
        let max_temp = daily_entry(&payload.daily.temperature_2m_max, i, "temperature_2m_max")?;
        let min_temp = daily_entry(&payload.daily.temperature_2m_min, i, "temperature_2m_min")?;
        let code = daily_entry(&payload.daily.weather_code, i, "weather_code")?;

        let parsed_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| WeatherError::Parse(format!("bad daily date '{date}': {e}")))?;
        let day_condition = Condition::from_wmo_code(code);

        forecast.push(ForecastDay {
            date: date.clone(),
            day_of_week: parsed_date.format("%A").to_string(),
            max_temp,
            min_temp,
            condition: day_condition,
            icon: day_condition.icon_code().to_string(),
        });
    }

    Ok(WeatherSnapshot {
        location: location.to_string(),
        temperature: payload.current.temperature_2m,
        feels_like: payload.current.apparent_temperature,
        condition,
        description: format!("{} in {}", condition.label(), location),
        humidity: payload.current.relative_humidity_2m,
        wind_speed: payload.current.wind_speed_10m,
        icon: condition.icon_code().to_string(),
        last_updated: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        forecast,
    })
}

/// Index into one of the parallel daily arrays; a missing entry means the
/// arrays are out of sync and the payload is malformed.
fn daily_entry<T: Copy>(values: &[T], index: usize, field: &str) -> Result<T, WeatherError> {
    values.get(index).copied().ok_or_else(|| {
        WeatherError::Parse(format!("daily array '{field}' shorter than 'time'"))
    })
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeoMatch>,
}

#[derive(Debug, Clone, Deserialize)]
struct GeoMatch {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    relative_humidity_2m: u8,
    apparent_temperature: f64,
    wind_speed_10m: f64,
    weather_code: i32,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    weather_code: Vec<i32>,
}
