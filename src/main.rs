use std::borrow::Cow;
use std::time::Duration;

use anyhow::Result;
use bfdi_core::{AppError, Config, ConfigError};
use bfdi_dialogue::CharacterTable;
use bfdi_weather::{resolve_location, Geocoder, Location, WeatherProvider};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod dashboard;

use dashboard::Dashboard;

/// Width the terminal view is laid out for; anything above the compact
/// chart breakpoint keeps every label.
const VIEWPORT_WIDTH_PX: u32 = 1280;

#[tokio::main]
async fn main() -> Result<()> {
    bfdi_core::init()?;

    let (config, _) = match Config::load_validated() {
        Ok(loaded) => loaded,
        Err(e) => {
            let err = AppError::Config(ConfigError::Invalid(format!("{:#}", e)));
            eprintln!("{}", err.user_message());
            return Err(err.into());
        }
    };
    tracing::info!("BFDI weather dashboard started");

    let table = load_table(&config);
    let mut rng = StdRng::from_entropy();

    let geocoder = Geocoder::new(
        &config.weather.geocoder_base_url,
        &config.weather.user_agent,
    )
    .map_err(AppError::from)?;
    let provider = WeatherProvider::new(
        &config.weather.api_base_url,
        &config.weather.user_agent,
        config.display.temperature_unit,
    )
    .map_err(AppError::from)?;

    let location = match resolve_location(&geocoder, &config.location).await {
        Ok(location) => location,
        Err(e) => {
            let err = AppError::from(e);
            eprintln!("{}", err.user_message());
            return Err(err.into());
        }
    };
    tracing::info!(
        "Using location {:.4}, {:.4}",
        location.latitude,
        location.longitude
    );

    let refresh_minutes = config.weather.refresh_minutes;
    let mut dashboard = Dashboard::new(config, table, &mut rng);

    show(&dashboard, &provider, &location).await;
    if refresh_minutes == 0 {
        return Ok(());
    }

    let mut interval = tokio::time::interval(Duration::from_secs(u64::from(refresh_minutes) * 60));
    // First tick completes immediately
    interval.tick().await;

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                dashboard.refresh_character(&mut rng);
                show(&dashboard, &provider, &location).await;
            }
            _ = &mut shutdown => {
                tracing::info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}

/// Configured table when one is set and valid, otherwise the built-in cast.
fn load_table(config: &Config) -> Cow<'static, CharacterTable> {
    let Some(path) = config.dialogue.table_path.as_deref() else {
        return Cow::Borrowed(CharacterTable::builtin());
    };

    match CharacterTable::load(path) {
        Ok(table) => Cow::Owned(table),
        Err(e) => {
            let err = AppError::from(e);
            tracing::warn!("{}; using built-in characters", err);
            Cow::Borrowed(CharacterTable::builtin())
        }
    }
}

async fn show(dashboard: &Dashboard, provider: &WeatherProvider, location: &Location) {
    match provider.fetch(location).await {
        Ok(report) => {
            let now = chrono::Local::now().naive_local();
            println!("{}\n", dashboard.view(&report, now, VIEWPORT_WIDTH_PX));
        }
        Err(e) => {
            let err = AppError::from(e);
            tracing::error!("Weather refresh failed: {}", err);
            eprintln!("{}", err.user_message());
        }
    }
}
