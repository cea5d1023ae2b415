pub mod config;
pub mod display;
pub mod error;

pub use config::{
    Config, DialogueConfig, DisplayConfig, LocationConfig, ValidationResult, WeatherConfig,
};
pub use display::{format_date, ChartMetric, ClockFormat, TemperatureUnit};
pub use error::{
    AppError, ConfigError, DialogueError, NetworkError, ReqwestErrorExt, WeatherError,
};

use anyhow::Result;

/// Initialize logging for the dashboard
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("BFDI weather core initialized");
    Ok(())
}
