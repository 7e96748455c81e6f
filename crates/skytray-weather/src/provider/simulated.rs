//! Simulated weather provider.
//!
//! Produces deterministic synthetic snapshots derived from the location
//! name, with no network access. Useful for demos, offline development,
//! and exercising the renderer across the condition vocabulary.

use async_trait::async_trait;
use chrono::{Days, Local};

use crate::error::WeatherError;
use crate::types::{Condition, ForecastDay, WeatherSnapshot};

use super::WeatherProvider;

/// Weather codes cycled through by the simulation, one per day offset.
const SIMULATED_CODES: [i32; 8] = [0, 2, 61, 3, 45, 80, 71, 95];

#[derive(Debug, Clone, Default)]
pub struct SimulatedProvider;

impl SimulatedProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WeatherProvider for SimulatedProvider {
    async fn acquire(&self, location: &str) -> Result<WeatherSnapshot, WeatherError> {
        let seed = seed_from(location);
        let code = SIMULATED_CODES[(seed % SIMULATED_CODES.len() as u64) as usize];
        let condition = Condition::from_wmo_code(code);

        let temperature = 5.0 + (seed % 250) as f64 / 10.0;
        let today = Local::now().date_naive();

        let forecast = (1..=5u64)
            .map(|offset| {
                let date = today + Days::new(offset);
                let day_code =
                    SIMULATED_CODES[((seed + offset) % SIMULATED_CODES.len() as u64) as usize];
                let day_condition = Condition::from_wmo_code(day_code);

                ForecastDay {
                    date: date.format("%Y-%m-%d").to_string(),
                    day_of_week: date.format("%A").to_string(),
                    max_temp: temperature + 3.0 + offset as f64,
                    min_temp: temperature - 4.0,
                    condition: day_condition,
                    icon: day_condition.icon_code().to_string(),
                }
            })
            .collect();

        Ok(WeatherSnapshot {
            location: location.to_string(),
            temperature,
            feels_like: temperature - 1.5,
            condition,
            description: format!("{} in {}", condition.label(), location),
            humidity: (40 + seed % 50) as u8,
            wind_speed: (seed % 300) as f64 / 10.0,
            icon: condition.icon_code().to_string(),
            last_updated: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            forecast,
        })
    }
}

/// FNV-1a over the location name; stable across runs.
fn seed_from(location: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in location.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}
