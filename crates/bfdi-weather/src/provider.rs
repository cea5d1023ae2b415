//! National Weather Service client: point metadata, then the hourly forecast.

use bfdi_core::TemperatureUnit;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::report::{read_report, HourlyForecast, PointProperties, PointResponse};
use crate::types::{Location, WeatherError, WeatherReport};

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    unit: TemperatureUnit,
}

impl WeatherProvider {
    pub fn new(base_url: &str, user_agent: &str, unit: TemperatureUnit) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
            unit,
        })
    }

    /// Look up the forecast grid for a location.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_point(&self, location: &Location) -> Result<PointProperties, WeatherError> {
        let url = format!(
            "{}/points/{:.4},{:.4}",
            self.base_url, location.latitude, location.longitude
        );
        let point: PointResponse = self.get_json(&url).await?;
        Ok(point.properties)
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_hourly(&self, forecast_url: &str) -> Result<HourlyForecast, WeatherError> {
        self.get_json(forecast_url).await
    }

    /// Fetch the hourly forecast for a location and read it into a report.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, location: &Location) -> Result<WeatherReport, WeatherError> {
        let point = self.fetch_point(location).await?;
        let forecast = self.fetch_hourly(&point.forecast_hourly).await?;
        let report = read_report(&forecast, point.place(), self.unit)?;

        tracing::info!(
            "Fetched {} forecast periods: {}",
            report.periods.len(),
            report.current.short_forecast
        );
        Ok(report)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/geo+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Forecast request to {} returned {}", url, status);
            return Err(WeatherError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(format!("JSON parse error: {}", e)))
    }
}
