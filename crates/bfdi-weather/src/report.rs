//! National Weather Service response shapes and conversion into a
//! [`WeatherReport`].

use bfdi_core::TemperatureUnit;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

use crate::types::{CurrentConditions, ForecastPeriod, Place, WeatherError, WeatherReport};

/// Number of hourly periods shown on the chart
pub const CHART_PERIODS: usize = 9;

/// `GET /points/{lat},{lon}`
#[derive(Debug, Deserialize)]
pub struct PointResponse {
    pub properties: PointProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointProperties {
    pub forecast_hourly: String,
    pub relative_location: Option<RelativeLocation>,
}

#[derive(Debug, Deserialize)]
pub struct RelativeLocation {
    pub properties: RelativeLocationProperties,
}

#[derive(Debug, Deserialize)]
pub struct RelativeLocationProperties {
    pub city: String,
    pub state: String,
}

impl PointProperties {
    pub fn place(&self) -> Option<Place> {
        self.relative_location.as_ref().map(|r| Place {
            city: r.properties.city.clone(),
            state: r.properties.state.clone(),
        })
    }
}

/// `GET {forecastHourly}`
#[derive(Debug, Deserialize)]
pub struct HourlyForecast {
    pub properties: HourlyProperties,
}

#[derive(Debug, Deserialize)]
pub struct HourlyProperties {
    pub periods: Vec<HourlyPeriod>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyPeriod {
    pub start_time: DateTime<FixedOffset>,
    pub temperature: f64,
    pub temperature_unit: String,
    #[serde(default)]
    pub probability_of_precipitation: Option<QuantitativeValue>,
    #[serde(default)]
    pub relative_humidity: Option<QuantitativeValue>,
    #[serde(default)]
    pub wind_speed: String,
    #[serde(default)]
    pub short_forecast: String,
}

/// `{ "unitCode": "wmoUnit:percent", "value": 20 }`; `value` may be null
#[derive(Debug, Deserialize)]
pub struct QuantitativeValue {
    pub value: Option<f64>,
}

fn percent(value: &Option<QuantitativeValue>) -> u8 {
    value
        .as_ref()
        .and_then(|v| v.value)
        .map(|v| v.round().clamp(0.0, 100.0) as u8)
        .unwrap_or(0)
}

impl HourlyPeriod {
    fn unit(&self) -> Result<TemperatureUnit, WeatherError> {
        TemperatureUnit::from_code(&self.temperature_unit).ok_or_else(|| {
            WeatherError::Parse(format!("unknown temperature unit {:?}", self.temperature_unit))
        })
    }
}

/// Build a report from an hourly forecast: current conditions from the first
/// period, chart periods from the first [`CHART_PERIODS`] with temperatures
/// converted to `display_unit`.
pub fn read_report(
    forecast: &HourlyForecast,
    place: Option<Place>,
    display_unit: TemperatureUnit,
) -> Result<WeatherReport, WeatherError> {
    let first = forecast
        .properties
        .periods
        .first()
        .ok_or(WeatherError::NoPeriods)?;

    let current = CurrentConditions {
        temperature: first.temperature,
        unit: first.unit()?,
        precipitation_chance: percent(&first.probability_of_precipitation),
        humidity: percent(&first.relative_humidity),
        wind_speed: first.wind_speed.clone(),
        short_forecast: first.short_forecast.clone(),
    };

    let periods = forecast
        .properties
        .periods
        .iter()
        .take(CHART_PERIODS)
        .map(|p| {
            Ok(ForecastPeriod {
                start_time: p.start_time,
                temperature: display_unit.convert(p.temperature, p.unit()?),
                humidity: percent(&p.relative_humidity),
                precipitation_chance: percent(&p.probability_of_precipitation),
            })
        })
        .collect::<Result<Vec<_>, WeatherError>>()?;

    Ok(WeatherReport {
        current,
        periods,
        display_unit,
        place,
        fetched_at: Utc::now(),
    })
}
