use bfdi_core::LocationConfig;

use crate::geocode::Geocoder;
use crate::types::{Location, LocationError};

/// Resolve the configured location to coordinates.
///
/// With `use_current_location` the device fix is checked against forecast
/// coverage by reverse geocoding; otherwise the city/state pair (or the
/// Washington, DC fallback) is forward geocoded.
pub async fn resolve_location(
    geocoder: &Geocoder,
    config: &LocationConfig,
) -> Result<Location, LocationError> {
    if config.use_current_location {
        let (latitude, longitude) = config.coordinates().ok_or(LocationError::Unavailable)?;
        let address = geocoder.reverse(latitude, longitude).await?;
        address.ensure_supported()?;
        tracing::info!("Using device location: {}, {}", latitude, longitude);
        return Ok(Location::new(latitude, longitude));
    }

    let (city, state) = config.city_state();
    geocoder.search(&city, &state).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_device_location_without_fix_is_unavailable() {
        let geocoder = Geocoder::new("http://127.0.0.1:9", "test").unwrap();
        let config = LocationConfig {
            use_current_location: true,
            ..Default::default()
        };

        let result = resolve_location(&geocoder, &config).await;
        assert!(matches!(result, Err(LocationError::Unavailable)));
    }

    #[tokio::test]
    async fn test_device_location_outside_coverage() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reverse"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "address": { "country_code": "fr", "state": "Île-de-France" }
            })))
            .mount(&mock_server)
            .await;

        let geocoder = Geocoder::new(&mock_server.uri(), "test").unwrap();
        let config = LocationConfig {
            use_current_location: true,
            latitude: Some(48.85),
            longitude: Some(2.35),
            ..Default::default()
        };

        let result = resolve_location(&geocoder, &config).await;
        assert!(matches!(result, Err(LocationError::Unsupported { .. })));
    }

    #[tokio::test]
    async fn test_blank_city_uses_washington_dc() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("city", "Washington"))
            .and(query_param("state", "DC"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "lat": "38.8950368", "lon": "-77.0365427" }
            ])))
            .mount(&mock_server)
            .await;

        let geocoder = Geocoder::new(&mock_server.uri(), "test").unwrap();
        let location = resolve_location(&geocoder, &LocationConfig::default())
            .await
            .unwrap();

        assert!((location.latitude - 38.8950368).abs() < 1e-9);
    }
}
