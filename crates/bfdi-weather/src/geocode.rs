//! Forward and reverse geocoding via Nominatim (OpenStreetMap).
//! Free, no API key required, but a User-Agent is mandatory.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;
use url::Url;

use crate::types::{Location, LocationError};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Regions covered by the National Weather Service: states, DC and territories.
pub const SUPPORTED_REGIONS: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "AS", "DC", "FM", "GU", "MH", "MP", "PR", "PW", "VI",
];

const STATE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
    ("District of Columbia", "DC"),
    ("American Samoa", "AS"),
    ("Guam", "GU"),
    ("Northern Mariana Islands", "MP"),
    ("Puerto Rico", "PR"),
    ("U.S. Virgin Islands", "VI"),
    ("Palau", "PW"),
    ("Marshall Islands", "MH"),
    ("Federated States of Micronesia", "FM"),
];

/// USPS abbreviation for a full state or territory name
pub fn state_abbreviation(name: &str) -> Option<&'static str> {
    STATE_ABBREVIATIONS
        .iter()
        .find(|(full, _)| *full == name)
        .map(|(_, abbr)| *abbr)
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Option<ReverseAddress>,
}

/// Subset of a Nominatim address used for the coverage check
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseAddress {
    pub country_code: Option<String>,
    pub state_code: Option<String>,
    pub state: Option<String>,
}

impl ReverseAddress {
    /// State abbreviation, from `state_code` or by mapping the full state name.
    /// Empty when neither is known.
    pub fn state_abbreviation(&self) -> String {
        if let Some(code) = self.state_code.as_deref().filter(|c| !c.is_empty()) {
            return code.to_uppercase();
        }
        self.state
            .as_deref()
            .and_then(state_abbreviation)
            .unwrap_or_default()
            .to_string()
    }

    /// Check the address is inside forecast coverage. An unknown state inside
    /// the US is accepted.
    pub fn ensure_supported(&self) -> Result<(), LocationError> {
        let country = self
            .country_code
            .as_deref()
            .unwrap_or_default()
            .to_uppercase();
        let state = self.state_abbreviation();

        if country != "US" || (!state.is_empty() && !SUPPORTED_REGIONS.contains(&state.as_str())) {
            return Err(LocationError::Unsupported { country, state });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Client,
    base_url: String,
}

impl Geocoder {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, LocationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, LocationError> {
        Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| LocationError::Geocoder(format!("invalid geocoder URL: {}", e)))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, LocationError> {
        let response = self
            .client
            .get(url)
            .header("Accept-Language", "en")
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!("Geocoder returned status {}", response.status());
            return Err(LocationError::Geocoder(format!(
                "HTTP {}",
                response.status().as_u16()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| LocationError::Geocoder(format!("parse error: {}", e)))
    }

    /// Resolve a US city and state to coordinates.
    #[instrument(skip(self), level = "debug")]
    pub async fn search(&self, city: &str, state: &str) -> Result<Location, LocationError> {
        let mut url = self.endpoint("search")?;
        url.query_pairs_mut()
            .append_pair("city", city)
            .append_pair("state", state)
            .append_pair("country", "USA")
            .append_pair("format", "json")
            .append_pair("limit", "1");

        let results: Vec<SearchResult> = self.get_json(url).await?;
        let first = results
            .into_iter()
            .next()
            .ok_or_else(|| LocationError::NotFound(format!("{}, {}", city, state)))?;

        let latitude = parse_coordinate(&first.lat)?;
        let longitude = parse_coordinate(&first.lon)?;

        tracing::info!(
            "Geocoded {}, {} to {}, {} ({})",
            city,
            state,
            latitude,
            longitude,
            first.display_name.as_deref().unwrap_or("unnamed")
        );

        Ok(Location {
            latitude,
            longitude,
            city_name: Some(format!("{}, {}", city, state)),
        })
    }

    /// Reverse geocode coordinates to the address fields used for the coverage check.
    #[instrument(skip(self), level = "debug")]
    pub async fn reverse(&self, latitude: f64, longitude: f64) -> Result<ReverseAddress, LocationError> {
        let mut url = self.endpoint("reverse")?;
        url.query_pairs_mut()
            .append_pair("lat", &latitude.to_string())
            .append_pair("lon", &longitude.to_string())
            .append_pair("format", "json")
            .append_pair("zoom", "5")
            .append_pair("addressdetails", "1");

        let body: ReverseResponse = self.get_json(url).await?;
        Ok(body.address.unwrap_or_default())
    }
}

fn parse_coordinate(raw: &str) -> Result<f64, LocationError> {
    raw.trim()
        .parse()
        .map_err(|_| LocationError::Geocoder(format!("invalid coordinate {:?}", raw)))
}
