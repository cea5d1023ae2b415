//! Condition parsing for free-text short forecasts ("Chance Rain Showers",
//! "Mostly Sunny", ...).
//!
//! Matching is case-insensitive substring membership against an ordered rule
//! list; the first rule with a matching keyword wins.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Evening starts at this hour (inclusive)...
pub const EVENING_START_HOUR: u32 = 18;
/// ...and ends at this hour (exclusive).
pub const MORNING_START_HOUR: u32 = 6;

/// Weather conditions recognised in short-forecast text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ForecastCondition {
    Thunderstorm,
    Snow,
    Sleet,
    Rain,
    Hail,
    Fog,
    Cloudy,
    PartlyClear,
    Clear,
    Windy,
    #[default]
    Unknown,
}

/// Ordered rules for icon selection. Generic "cloudy" wins over the partly
/// phrases, so "Partly Cloudy" draws a cloud.
const RULES: &[(&[&str], ForecastCondition)] = &[
    (&["thunderstorm", "t-storm"], ForecastCondition::Thunderstorm),
    (&["snow", "flurries", "blizzard"], ForecastCondition::Snow),
    (&["sleet", "ice"], ForecastCondition::Sleet),
    (&["rain", "showers", "drizzle"], ForecastCondition::Rain),
    (&["hail"], ForecastCondition::Hail),
    (&["fog", "mist", "haze"], ForecastCondition::Fog),
    (&["cloudy", "overcast"], ForecastCondition::Cloudy),
    (
        &["partly sunny", "partly cloudy", "mostly sunny"],
        ForecastCondition::PartlyClear,
    ),
    (&["sunny", "clear"], ForecastCondition::Clear),
    (&["wind"], ForecastCondition::Windy),
];

impl ForecastCondition {
    /// Classify a short-forecast phrase. Never fails; unmatched text is `Unknown`.
    pub fn from_short_forecast(text: &str) -> Self {
        let text = text.to_lowercase();
        RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
            .map(|(_, condition)| *condition)
            .unwrap_or_default()
    }

    /// Material Symbols glyph for this condition
    pub fn icon_name(&self, evening: bool) -> &'static str {
        match self {
            Self::Thunderstorm => "thunderstorm",
            Self::Snow => "weather_snowy",
            Self::Sleet => "ac_unit",
            Self::Rain => "rainy",
            Self::Hail => "hail",
            Self::Fog => "foggy",
            Self::Cloudy => "cloud",
            Self::PartlyClear if evening => "partly_cloudy_night",
            Self::PartlyClear => "partly_cloudy_day",
            Self::Clear if evening => "bedtime",
            Self::Clear => "clear_day",
            Self::Windy => "air",
            Self::Unknown => "help",
        }
    }

    /// Sun and moon glyphs are drawn highlighted
    pub fn is_highlighted(&self) -> bool {
        matches!(self, Self::Clear | Self::PartlyClear)
    }
}

/// True for hours in `[18, 24) ∪ [0, 6)`.
pub fn is_evening(time: NaiveTime) -> bool {
    let hour = time.hour();
    hour >= EVENING_START_HOUR || hour < MORNING_START_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn test_thunderstorm_beats_rain() {
        assert_eq!(
            ForecastCondition::from_short_forecast("Showers And Thunderstorms"),
            ForecastCondition::Thunderstorm
        );
        assert_eq!(
            ForecastCondition::from_short_forecast("Chance T-storms"),
            ForecastCondition::Thunderstorm
        );
    }

    #[test]
    fn test_snow_beats_rain() {
        assert_eq!(
            ForecastCondition::from_short_forecast("Rain And Snow Likely"),
            ForecastCondition::Snow
        );
    }

    #[test]
    fn test_sleet_and_ice() {
        assert_eq!(ForecastCondition::from_short_forecast("Sleet"), ForecastCondition::Sleet);
        assert_eq!(
            ForecastCondition::from_short_forecast("Freezing Rain And Ice"),
            ForecastCondition::Sleet
        );
    }

    #[test]
    fn test_partly_cloudy_draws_a_cloud() {
        assert_eq!(
            ForecastCondition::from_short_forecast("Partly Cloudy"),
            ForecastCondition::Cloudy
        );
        assert_eq!(ForecastCondition::from_short_forecast("Partly Cloudy").icon_name(true), "cloud");
        assert_eq!(
            ForecastCondition::from_short_forecast("Partly Sunny"),
            ForecastCondition::PartlyClear
        );
        assert_eq!(
            ForecastCondition::from_short_forecast("Mostly Sunny").icon_name(false),
            "partly_cloudy_day"
        );
        assert_eq!(
            ForecastCondition::from_short_forecast("Mostly Cloudy"),
            ForecastCondition::Cloudy
        );
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(ForecastCondition::from_short_forecast(""), ForecastCondition::Unknown);
        assert_eq!(
            ForecastCondition::from_short_forecast("Smoke"),
            ForecastCondition::Unknown
        );
    }

    #[test]
    fn test_icon_day_night() {
        assert_eq!(ForecastCondition::Clear.icon_name(false), "clear_day");
        assert_eq!(ForecastCondition::Clear.icon_name(true), "bedtime");
        assert_eq!(ForecastCondition::PartlyClear.icon_name(true), "partly_cloudy_night");
        assert_eq!(ForecastCondition::Rain.icon_name(true), "rainy");
        assert_eq!(ForecastCondition::Unknown.icon_name(false), "help");
    }

    #[test]
    fn test_highlighted() {
        assert!(ForecastCondition::Clear.is_highlighted());
        assert!(!ForecastCondition::Cloudy.is_highlighted());
    }

    #[test]
    fn test_evening_boundaries() {
        assert!(is_evening(at(18)));
        assert!(is_evening(at(23)));
        assert!(is_evening(at(0)));
        assert!(is_evening(at(5)));
        assert!(!is_evening(at(6)));
        assert!(!is_evening(at(17)));
    }
}
