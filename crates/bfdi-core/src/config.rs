use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::display::{ChartMetric, ClockFormat, TemperatureUnit};

const APP_DIR: &str = "bfdi-weather";
const CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_CITY: &str = "Washington";
pub const DEFAULT_STATE: &str = "DC";
pub const DEFAULT_USER_AGENT: &str = "bfdi-weather-app";
pub const DEFAULT_API_BASE_URL: &str = "https://api.weather.gov";
pub const DEFAULT_GEOCODER_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Clock and temperature preferences
    #[serde(default)]
    pub display: DisplayConfig,

    /// Where to fetch the forecast for
    #[serde(default)]
    pub location: LocationConfig,

    /// Forecast service settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Character dialogue settings
    #[serde(default)]
    pub dialogue: DialogueConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub clock: ClockFormat,

    #[serde(default)]
    pub temperature_unit: TemperatureUnit,

    /// Series shown on the hourly chart
    #[serde(default)]
    pub chart_metric: ChartMetric,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Use the device position (`latitude`/`longitude`) instead of city/state
    #[serde(default)]
    pub use_current_location: bool,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// City and state for forward geocoding. Blank values fall back to Washington, DC.
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

impl LocationConfig {
    /// City/state pair with the Washington, DC fallback applied when either is blank.
    pub fn city_state(&self) -> (String, String) {
        let city = self.city.trim();
        let state = self.state.trim();
        if city.is_empty() || state.is_empty() {
            (DEFAULT_CITY.to_string(), DEFAULT_STATE.to_string())
        } else {
            (city.to_string(), state.to_string())
        }
    }

    /// Device coordinates, if both halves are set.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Refresh interval in minutes
    #[serde(default = "default_refresh_minutes")]
    pub refresh_minutes: u32,

    /// User-Agent sent to the forecast and geocoding services
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_geocoder_base_url")]
    pub geocoder_base_url: String,
}

fn default_refresh_minutes() -> u32 {
    15
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_geocoder_base_url() -> String {
    DEFAULT_GEOCODER_BASE_URL.to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            refresh_minutes: default_refresh_minutes(),
            user_agent: default_user_agent(),
            api_base_url: default_api_base_url(),
            geocoder_base_url: default_geocoder_base_url(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogueConfig {
    /// Pin a character by name instead of picking one at random
    pub character: Option<String>,

    /// JSON file replacing the built-in character table
    pub table_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default location, creating it if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.weather.api_base_url, "weather.api_base_url", &mut result);
        self.validate_url(
            &self.weather.geocoder_base_url,
            "weather.geocoder_base_url",
            &mut result,
        );

        if self.weather.user_agent.trim().is_empty() {
            result.add_error("weather.user_agent", "User-Agent must not be empty");
        }

        if self.weather.refresh_minutes == 0 {
            result.add_warning("weather.refresh_minutes", "Weather refresh disabled (0 minutes)");
        } else if self.weather.refresh_minutes > 1440 {
            result.add_warning(
                "weather.refresh_minutes",
                "Weather refresh interval is more than 24 hours",
            );
        }

        if self.location.use_current_location {
            match self.location.coordinates() {
                None => result.add_error(
                    "location",
                    "use_current_location requires latitude and longitude",
                ),
                Some((lat, lon)) => {
                    if !(-90.0..=90.0).contains(&lat) {
                        result.add_error("location.latitude", "Latitude must be within [-90, 90]");
                    }
                    if !(-180.0..=180.0).contains(&lon) {
                        result.add_error(
                            "location.longitude",
                            "Longitude must be within [-180, 180]",
                        );
                    }
                }
            }
        } else if self.location.city.trim().is_empty() || self.location.state.trim().is_empty() {
            result.add_warning(
                "location",
                format!("No city/state set - using {}, {}", DEFAULT_CITY, DEFAULT_STATE),
            );
        }

        if let Some(name) = &self.dialogue.character {
            if name.trim().is_empty() {
                result.add_error("dialogue.character", "Pinned character name is empty");
            }
        }

        if let Some(path) = &self.dialogue.table_path {
            if !path.is_file() {
                result.add_error(
                    "dialogue.table_path",
                    format!("Character table not found: {}", path.display()),
                );
            }
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join(APP_DIR);

        Ok(config_dir.join(CONFIG_FILE))
    }
}
