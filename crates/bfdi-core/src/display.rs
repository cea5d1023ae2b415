//! Display preferences: temperature unit and clock format.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    /// Parse the single-letter unit code used by forecast feeds ("F" / "C").
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "F" => Some(Self::Fahrenheit),
            "C" => Some(Self::Celsius),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "°F",
            Self::Celsius => "°C",
        }
    }

    /// Convert `value` measured in `from` into this unit, rounded to a whole degree.
    pub fn convert(&self, value: f64, from: TemperatureUnit) -> i32 {
        let converted = match (from, *self) {
            (Self::Fahrenheit, Self::Celsius) => (value - 32.0) * 5.0 / 9.0,
            (Self::Celsius, Self::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
            _ => value,
        };
        converted.round() as i32
    }
}

/// Clock display preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClockFormat {
    #[default]
    TwelveHour,
    TwentyFourHour,
}

impl ClockFormat {
    /// Full clock reading, e.g. "3:04:05 PM" or "15:04:05".
    pub fn format_time(&self, time: NaiveTime) -> String {
        match self {
            Self::TwelveHour => time.format("%-I:%M:%S %p").to_string(),
            Self::TwentyFourHour => time.format("%H:%M:%S").to_string(),
        }
    }

    /// Two-digit hour label used on chart axes, e.g. "03 PM" or "15".
    pub fn format_hour_label(&self, time: NaiveTime) -> String {
        match self {
            Self::TwelveHour => {
                let (pm, hour) = time.hour12();
                format!("{:02} {}", hour, if pm { "PM" } else { "AM" })
            }
            Self::TwentyFourHour => format!("{:02}", time.hour()),
        }
    }
}

/// Series drawn on the hourly chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartMetric {
    #[default]
    Temperature,
    Precipitation,
    Humidity,
}

impl ChartMetric {
    /// Suffix drawn after each data label
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Temperature => "°",
            Self::Precipitation | Self::Humidity => "%",
        }
    }
}

/// Long-form date, e.g. "Monday, January 1 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d %Y").to_string()
}
