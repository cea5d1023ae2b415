//! Maps weather and location errors to `bfdi_core::AppError` for user-facing messages.

use bfdi_core::{AppError, NetworkError, ReqwestErrorExt, WeatherError as CoreWeatherError};

use crate::types::{LocationError, WeatherError};

impl From<LocationError> for AppError {
    fn from(e: LocationError) -> Self {
        match e {
            LocationError::Unavailable => AppError::Weather(CoreWeatherError::LocationNotFound(
                "device location not available".into(),
            )),
            LocationError::NotFound(s) => AppError::Weather(CoreWeatherError::LocationNotFound(s)),
            LocationError::Unsupported { country, state } => AppError::Weather(
                CoreWeatherError::UnsupportedLocation(format!("{} {}", country, state).trim().to_string()),
            ),
            LocationError::Geocoder(s) => AppError::Weather(CoreWeatherError::ApiError(s)),
            LocationError::Network(e) => AppError::Network(e.into_network_error()),
        }
    }
}

impl From<WeatherError> for AppError {
    fn from(e: WeatherError) -> Self {
        match e {
            WeatherError::Network(e) => AppError::Network(e.into_network_error()),
            WeatherError::Location(e) => e.into(),
            // The points endpoint answers 404 for coordinates outside coverage
            WeatherError::Http { status: 404, url } => {
                AppError::Weather(CoreWeatherError::UnsupportedLocation(url))
            }
            WeatherError::Http { status: 503, .. } => {
                AppError::Weather(CoreWeatherError::ServiceUnavailable)
            }
            WeatherError::Http { status, url } => AppError::Network(NetworkError::ServerError {
                status,
                message: url,
            }),
            WeatherError::Parse(s) => AppError::Network(NetworkError::InvalidResponse(s)),
            WeatherError::NoPeriods => AppError::Weather(CoreWeatherError::ApiError(
                "forecast contained no periods".into(),
            )),
        }
    }
}
