use bfdi_core::TemperatureUnit;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Geographic location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub city_name: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            city_name: None,
        }
    }
}

/// Forecast office's nearest named place, e.g. "Seattle, WA"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub city: String,
    pub state: String,
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}

/// Conditions for the first forecast period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature as reported by the feed, in `unit`
    pub temperature: f64,
    pub unit: TemperatureUnit,
    pub precipitation_chance: u8,
    pub humidity: u8,
    /// Free-form wind text, e.g. "10 mph"
    pub wind_speed: String,
    /// Short forecast phrase, e.g. "Chance Rain Showers"
    pub short_forecast: String,
}

impl CurrentConditions {
    pub fn temperature_in(&self, unit: TemperatureUnit) -> i32 {
        unit.convert(self.temperature, self.unit)
    }
}

/// One hourly period prepared for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    pub start_time: DateTime<FixedOffset>,
    /// Temperature in the report's display unit
    pub temperature: i32,
    pub humidity: u8,
    pub precipitation_chance: u8,
}

/// Complete weather data bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub periods: Vec<ForecastPeriod>,
    /// Unit the `periods` temperatures are expressed in
    pub display_unit: TemperatureUnit,
    pub place: Option<Place>,
    pub fetched_at: DateTime<Utc>,
}

/// Location service errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Device location not available")]
    Unavailable,
    #[error("Could not find location for {0}")]
    NotFound(String),
    #[error("Location outside forecast coverage (country: {country}, state: {state})")]
    Unsupported { country: String, state: String },
    #[error("Geocoder error: {0}")]
    Geocoder(String),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Forecast contained no periods")]
    NoPeriods,
}
