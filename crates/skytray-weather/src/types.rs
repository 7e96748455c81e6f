use serde::{Deserialize, Serialize};

/// Weather condition vocabulary mapped from WMO weather codes.
///
/// The mapping is total: codes outside the table resolve to
/// [`Condition::Unknown`] instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Condition {
    #[serde(rename = "Clear Sky")]
    ClearSky,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    #[serde(rename = "Foggy")]
    Foggy,
    #[serde(rename = "Drizzle")]
    Drizzle,
    #[serde(rename = "Rainy")]
    Rainy,
    #[serde(rename = "Freezing Rain")]
    FreezingRain,
    #[serde(rename = "Snowy")]
    Snowy,
    #[serde(rename = "Snow Grains")]
    SnowGrains,
    #[serde(rename = "Rain Showers")]
    RainShowers,
    #[serde(rename = "Snow Showers")]
    SnowShowers,
    #[serde(rename = "Thunderstorm")]
    Thunderstorm,
    #[serde(rename = "Thunderstorm with Hail")]
    ThunderstormWithHail,
    #[default]
    #[serde(rename = "Unknown", other)]
    Unknown,
}

impl Condition {
    /// Convert a WMO weather code to a condition.
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::ClearSky,
            1..=3 => Self::PartlyCloudy,
            45 | 48 => Self::Foggy,
            51 | 53 | 55 => Self::Drizzle,
            61 | 63 | 65 => Self::Rainy,
            66 | 67 => Self::FreezingRain,
            71 | 73 | 75 => Self::Snowy,
            77 => Self::SnowGrains,
            80 | 81 | 82 => Self::RainShowers,
            85 | 86 => Self::SnowShowers,
            95 => Self::Thunderstorm,
            96 | 99 => Self::ThunderstormWithHail,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label, as shown in the UI and the tray tooltip.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear Sky",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Foggy => "Foggy",
            Self::Drizzle => "Drizzle",
            Self::Rainy => "Rainy",
            Self::FreezingRain => "Freezing Rain",
            Self::Snowy => "Snowy",
            Self::SnowGrains => "Snow Grains",
            Self::RainShowers => "Rain Showers",
            Self::SnowShowers => "Snow Showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormWithHail => "Thunderstorm with Hail",
            Self::Unknown => "Unknown",
        }
    }

    /// Icon code token consumed by the frontend icon set.
    pub fn icon_code(&self) -> &'static str {
        match self {
            Self::ClearSky => "100",
            Self::PartlyCloudy => "101",
            Self::Foggy => "500",
            Self::Drizzle => "300",
            Self::Rainy => "305",
            Self::FreezingRain => "313",
            Self::Snowy | Self::SnowGrains => "400",
            Self::RainShowers => "309",
            Self::SnowShowers => "404",
            Self::Thunderstorm | Self::ThunderstormWithHail => "302",
            Self::Unknown => "999",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One future day's outlook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Weekday name derived from the date.
    pub day_of_week: String,
    pub max_temp: f64,
    pub min_temp: f64,
    pub condition: Condition,
    pub icon: String,
}

/// One immutable weather result for one location at one instant.
///
/// Field names serialize camelCase for the webview frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub location: String,
    /// Current temperature in °C.
    pub temperature: f64,
    pub feels_like: f64,
    pub condition: Condition,
    /// Free-text summary, `"<condition> in <location>"`.
    pub description: String,
    /// Relative humidity, 0–100.
    pub humidity: u8,
    /// Wind speed in km/h.
    pub wind_speed: f64,
    pub icon: String,
    /// Acquisition instant, `YYYY-MM-DD HH:MM:SS` local time.
    pub last_updated: String,
    /// Five days starting tomorrow, chronological.
    pub forecast: Vec<ForecastDay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wmo_code_clear_sky() {
        assert_eq!(Condition::from_wmo_code(0), Condition::ClearSky);
        assert_eq!(Condition::ClearSky.icon_code(), "100");
    }

    #[test]
    fn test_wmo_code_partly_cloudy() {
        for code in [1, 2, 3] {
            assert_eq!(Condition::from_wmo_code(code), Condition::PartlyCloudy);
        }
        assert_eq!(Condition::PartlyCloudy.icon_code(), "101");
    }

    #[test]
    fn test_wmo_code_fog() {
        assert_eq!(Condition::from_wmo_code(45), Condition::Foggy);
        assert_eq!(Condition::from_wmo_code(48), Condition::Foggy);
        assert_eq!(Condition::Foggy.icon_code(), "500");
    }

    #[test]
    fn test_wmo_code_drizzle() {
        for code in [51, 53, 55] {
            assert_eq!(Condition::from_wmo_code(code), Condition::Drizzle);
        }
        assert_eq!(Condition::Drizzle.icon_code(), "300");
    }

    #[test]
    fn test_wmo_code_rain() {
        for code in [61, 63, 65] {
            assert_eq!(Condition::from_wmo_code(code), Condition::Rainy);
        }
        assert_eq!(Condition::Rainy.icon_code(), "305");
    }

    #[test]
    fn test_wmo_code_freezing_rain() {
        assert_eq!(Condition::from_wmo_code(66), Condition::FreezingRain);
        assert_eq!(Condition::from_wmo_code(67), Condition::FreezingRain);
        assert_eq!(Condition::FreezingRain.icon_code(), "313");
    }

    #[test]
    fn test_wmo_code_snow() {
        for code in [71, 73, 75] {
            assert_eq!(Condition::from_wmo_code(code), Condition::Snowy);
        }
        assert_eq!(Condition::from_wmo_code(77), Condition::SnowGrains);
        assert_eq!(Condition::Snowy.icon_code(), "400");
        assert_eq!(Condition::SnowGrains.icon_code(), "400");
    }

    #[test]
    fn test_wmo_code_showers() {
        for code in [80, 81, 82] {
            assert_eq!(Condition::from_wmo_code(code), Condition::RainShowers);
        }
        assert_eq!(Condition::RainShowers.icon_code(), "309");
        assert_eq!(Condition::from_wmo_code(85), Condition::SnowShowers);
        assert_eq!(Condition::from_wmo_code(86), Condition::SnowShowers);
        assert_eq!(Condition::SnowShowers.icon_code(), "404");
    }

    #[test]
    fn test_wmo_code_thunderstorm() {
        assert_eq!(Condition::from_wmo_code(95), Condition::Thunderstorm);
        assert_eq!(Condition::Thunderstorm.icon_code(), "302");
    }

    #[test]
    fn test_wmo_code_thunderstorm_with_hail() {
        for code in [96, 99] {
            let condition = Condition::from_wmo_code(code);
            assert_eq!(condition, Condition::ThunderstormWithHail);
            assert_eq!(condition.label(), "Thunderstorm with Hail");
        }
        assert_eq!(Condition::ThunderstormWithHail.icon_code(), "302");
    }

    #[test]
    fn test_unknown_codes_resolve_to_sentinel() {
        for code in [-1, 4, 42, 100, 999] {
            let condition = Condition::from_wmo_code(code);
            assert_eq!(condition, Condition::Unknown);
            assert_eq!(condition.label(), "Unknown");
            assert_eq!(condition.icon_code(), "999");
        }
    }

    #[test]
    fn test_condition_serializes_as_label() {
        let json = serde_json::to_string(&Condition::ClearSky).unwrap();
        assert_eq!(json, "\"Clear Sky\"");
        let json = serde_json::to_string(&Condition::ThunderstormWithHail).unwrap();
        assert_eq!(json, "\"Thunderstorm with Hail\"");
    }

    #[test]
    fn test_unrecognized_label_deserializes_to_unknown() {
        let condition: Condition = serde_json::from_str("\"Hazy\"").unwrap();
        assert_eq!(condition, Condition::Unknown);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let snapshot = WeatherSnapshot {
            location: "Paris".to_string(),
            temperature: 21.4,
            feels_like: 20.1,
            condition: Condition::ClearSky,
            description: "Clear Sky in Paris".to_string(),
            humidity: 40,
            wind_speed: 12.0,
            icon: "100".to_string(),
            last_updated: "2026-08-28 12:00:00".to_string(),
            forecast: vec![],
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"feelsLike\":20.1"));
        assert!(json.contains("\"windSpeed\":12.0"));
        assert!(json.contains("\"lastUpdated\""));
        assert!(json.contains("\"condition\":\"Clear Sky\""));
    }
}
