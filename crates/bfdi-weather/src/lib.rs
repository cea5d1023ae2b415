//! Weather service for the BFDI dashboard
//!
//! Fetches hourly forecasts from the National Weather Service, resolves the
//! configured location through Nominatim, and turns short-forecast text into
//! conditions and icons.

pub mod chart;
pub mod condition;
mod error_mapping;
pub mod geocode;
pub mod location;
pub mod provider;
pub mod report;
pub mod types;

pub use chart::{chart_points, ChartMetric, ChartPoint};
pub use condition::{is_evening, ForecastCondition};
pub use geocode::Geocoder;
pub use location::resolve_location;
pub use provider::WeatherProvider;
pub use types::*;
