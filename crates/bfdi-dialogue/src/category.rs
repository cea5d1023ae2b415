//! Dialogue categories and the forecast classifier.

use bfdi_weather::is_evening;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Weather bucket used to pick a character's reaction and the page theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sunny,
    Night,
    Cloudy,
    Raining,
    Snowy,
    Windy,
    Foggy,
    Other,
}

/// Ordered rules, first match wins. The partly-clear phrases are tested
/// before "cloudy", which they contain.
const RULES: &[(&[&str], Category)] = &[
    (&["thunderstorm", "t-storm"], Category::Raining),
    (&["snow", "flurries", "blizzard"], Category::Snowy),
    (&["sleet", "ice"], Category::Snowy),
    (&["rain", "showers", "drizzle"], Category::Raining),
    (&["hail"], Category::Raining),
    (&["fog", "mist", "haze"], Category::Foggy),
    (&["partly sunny", "partly cloudy", "mostly sunny"], Category::Sunny),
    (&["cloudy", "overcast"], Category::Cloudy),
    (&["sunny", "clear"], Category::Sunny),
    (&["wind"], Category::Windy),
];

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Sunny,
        Category::Night,
        Category::Cloudy,
        Category::Raining,
        Category::Snowy,
        Category::Windy,
        Category::Foggy,
        Category::Other,
    ];

    /// Classify a short-forecast phrase.
    ///
    /// Unmatched or empty text is [`Category::Other`]. Any text that would
    /// otherwise be [`Category::Sunny`] becomes [`Category::Night`] when
    /// `reference_time` falls in the evening window (18:00 to 06:00); this
    /// includes the partly-clear phrases such as "Partly Cloudy". Without a
    /// time the night check is skipped.
    pub fn classify(forecast_text: &str, reference_time: Option<NaiveTime>) -> Self {
        let text = forecast_text.to_lowercase();
        let category = RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
            .map_or(Category::Other, |(_, category)| *category);

        if category == Category::Sunny && reference_time.is_some_and(is_evening) {
            return Category::Night;
        }
        category
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sunny => "sunny",
            Category::Night => "night",
            Category::Cloudy => "cloudy",
            Category::Raining => "raining",
            Category::Snowy => "snowy",
            Category::Windy => "windy",
            Category::Foggy => "foggy",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(hour, 0, 0)
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(Category::classify("SUNNY", None), Category::Sunny);
        assert_eq!(Category::classify("Sunny", None), Category::Sunny);
        assert_eq!(Category::classify("sunny", None), Category::Sunny);
    }

    #[test]
    fn test_rain_beats_wind() {
        assert_eq!(Category::classify("rain and wind", None), Category::Raining);
    }

    #[test]
    fn test_partly_cloudy_is_sunny() {
        assert_eq!(Category::classify("partly cloudy", None), Category::Sunny);
        assert_eq!(Category::classify("Mostly Sunny", None), Category::Sunny);
        assert_eq!(Category::classify("Mostly Cloudy", None), Category::Cloudy);
    }

    #[test]
    fn test_night_refinement() {
        assert_eq!(Category::classify("Clear", at(23)), Category::Night);
        assert_eq!(Category::classify("Clear", at(10)), Category::Sunny);
        assert_eq!(Category::classify("Clear", None), Category::Sunny);
        assert_eq!(Category::classify("Partly Cloudy", at(3)), Category::Night);
    }

    #[test]
    fn test_partly_clear_phrases_turn_night() {
        for text in ["Partly Cloudy", "Partly Sunny", "Mostly Sunny"] {
            assert_eq!(Category::classify(text, at(14)), Category::Sunny, "{}", text);
            assert_eq!(Category::classify(text, at(20)), Category::Night, "{}", text);
        }
        assert_eq!(Category::classify("Mostly Cloudy", at(20)), Category::Cloudy);
    }

    #[test]
    fn test_night_window_boundaries() {
        assert_eq!(Category::classify("Sunny", at(18)), Category::Night);
        assert_eq!(Category::classify("Sunny", at(5)), Category::Night);
        assert_eq!(Category::classify("Sunny", at(6)), Category::Sunny);
        assert_eq!(Category::classify("Sunny", at(17)), Category::Sunny);
    }

    #[test]
    fn test_night_only_applies_to_clear_text() {
        assert_eq!(Category::classify("Light Rain", at(23)), Category::Raining);
        assert_eq!(Category::classify("Cloudy", at(23)), Category::Cloudy);
        assert_eq!(
            Category::classify("Chance Showers then Mostly Sunny", at(22)),
            Category::Raining
        );
    }

    #[test]
    fn test_rule_precedence() {
        assert_eq!(Category::classify("Chance T-storms", None), Category::Raining);
        assert_eq!(Category::classify("Snow Flurries", None), Category::Snowy);
        assert_eq!(Category::classify("Sleet", None), Category::Snowy);
        assert_eq!(Category::classify("Rain And Sleet", None), Category::Snowy);
        assert_eq!(Category::classify("Patchy Drizzle", None), Category::Raining);
        assert_eq!(Category::classify("Hail", None), Category::Raining);
        assert_eq!(Category::classify("Areas Of Fog", None), Category::Foggy);
        assert_eq!(Category::classify("Haze", None), Category::Foggy);
        assert_eq!(Category::classify("Overcast", None), Category::Cloudy);
        assert_eq!(Category::classify("Breezy, Clear Skies", None), Category::Sunny);
        assert_eq!(Category::classify("Windy", None), Category::Windy);
    }

    #[test]
    fn test_unknown_and_empty_are_other() {
        assert_eq!(Category::classify("", None), Category::Other);
        assert_eq!(Category::classify("Smoke", at(12)), Category::Other);
        assert_eq!(Category::classify("   ", at(23)), Category::Other);
    }

    #[test]
    fn test_every_category_is_reachable() {
        let samples = [
            ("Sunny", None),
            ("Clear", at(22)),
            ("Cloudy", None),
            ("Rain", None),
            ("Snow", None),
            ("Wind", None),
            ("Fog", None),
            ("Dust", None),
        ];
        let reached: std::collections::BTreeSet<_> = samples
            .iter()
            .map(|(text, time)| Category::classify(text, *time))
            .collect();
        assert_eq!(reached.len(), Category::ALL.len());
    }

    #[test]
    fn test_classify_is_idempotent() {
        let first = Category::classify("Chance Rain Showers", at(20));
        for _ in 0..10 {
            assert_eq!(Category::classify("Chance Rain Showers", at(20)), first);
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Raining".parse::<Category>(), Ok(Category::Raining));
        assert!("stormy".parse::<Category>().is_err());
        assert_eq!(Category::Foggy.to_string(), "foggy");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Category::Night).unwrap(), "\"night\"");
        let parsed: Category = serde_json::from_str("\"windy\"").unwrap();
        assert_eq!(parsed, Category::Windy);
    }
}
