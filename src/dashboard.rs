//! Dashboard state: the selected character and the view built from a report.

use std::borrow::Cow;
use std::collections::BTreeMap;

use bfdi_core::{format_date, AppError, Config, DialogueError};
use bfdi_dialogue::{Category, CharacterTable, ResponsePayload, Theme};
use bfdi_weather::chart::is_compact;
use bfdi_weather::{chart_points, is_evening, ChartMetric, ChartPoint, ForecastCondition, WeatherReport};
use chrono::NaiveDateTime;
use rand::Rng;

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub date: String,
    pub time: String,
    pub place: Option<String>,
    pub temperature: i32,
    pub unit_symbol: &'static str,
    pub short_forecast: String,
    pub precipitation_chance: u8,
    pub humidity: u8,
    pub wind_speed: String,
    pub icon: &'static str,
    pub icon_highlighted: bool,
    pub category: Category,
    pub theme: Theme,
    pub character: String,
    pub response: ResponsePayload,
    pub image_path: Option<String>,
    /// Inline style for the character image
    pub image_style: BTreeMap<String, String>,
    pub chart_metric: ChartMetric,
    pub chart: Vec<ChartPoint>,
}

pub struct Dashboard {
    config: Config,
    table: Cow<'static, CharacterTable>,
    character: String,
    pinned: bool,
}

impl Dashboard {
    /// Start with the configured character, or a random one when none is
    /// pinned or the pinned name isn't in the table.
    pub fn new<R: Rng + ?Sized>(
        config: Config,
        table: Cow<'static, CharacterTable>,
        rng: &mut R,
    ) -> Self {
        let pinned = config
            .dialogue
            .character
            .as_deref()
            .and_then(|name| match table.get(name) {
                Some(character) => Some(character.name().to_string()),
                None => {
                    let err = AppError::Dialogue(DialogueError::UnknownCharacter(name.to_string()));
                    tracing::warn!("{} ({})", err, err.user_message());
                    None
                }
            });

        let (character, pinned) = match pinned {
            Some(name) => (name, true),
            None => (table.pick_random(rng).name().to_string(), false),
        };
        tracing::info!("Selected character: {}", character);

        Self {
            config,
            table,
            character,
            pinned,
        }
    }

    pub fn character(&self) -> &str {
        &self.character
    }

    /// Refresh signal: switch to a different character unless one is pinned.
    pub fn refresh_character<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.pinned {
            return;
        }
        self.character = self
            .table
            .pick_different(&self.character, rng)
            .name()
            .to_string();
        tracing::debug!("Switched character to {}", self.character);
    }

    pub fn view(&self, report: &WeatherReport, now: NaiveDateTime, viewport_width: u32) -> DashboardView {
        let display = &self.config.display;
        let current = &report.current;
        let time = now.time();

        let condition = ForecastCondition::from_short_forecast(&current.short_forecast);
        let category = Category::classify(&current.short_forecast, Some(time));

        let response = match self.table.get(&self.character) {
            Some(character) => character.resolve(category).clone(),
            None => ResponsePayload::fallback().clone(),
        };

        DashboardView {
            date: format_date(now.date()),
            time: display.clock.format_time(time),
            place: report.place.as_ref().map(ToString::to_string),
            temperature: current.temperature_in(display.temperature_unit),
            unit_symbol: display.temperature_unit.symbol(),
            short_forecast: current.short_forecast.clone(),
            precipitation_chance: current.precipitation_chance,
            humidity: current.humidity,
            wind_speed: current.wind_speed.clone(),
            icon: condition.icon_name(is_evening(time)),
            icon_highlighted: condition.is_highlighted(),
            category,
            theme: Theme::select(category, time),
            character: self.character.clone(),
            image_path: response.image_path(),
            image_style: response.render_style(viewport_width),
            response,
            chart_metric: display.chart_metric,
            chart: chart_points(
                &report.periods,
                display.chart_metric,
                display.clock,
                is_compact(viewport_width),
            ),
        }
    }
}

impl std::fmt::Display for DashboardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}    {}", self.date, self.time)?;
        if let Some(place) = &self.place {
            writeln!(f, "National Weather Service ({})", place)?;
        }
        writeln!(
            f,
            "[{}] {}{}  {}",
            self.icon, self.temperature, self.unit_symbol, self.short_forecast
        )?;
        writeln!(f, "Precipitation: {}%", self.precipitation_chance)?;
        writeln!(f, "Humidity: {}%", self.humidity)?;
        writeln!(f, "Wind: {}", self.wind_speed)?;

        let chart = self
            .chart
            .iter()
            .filter(|p| !p.label.is_empty())
            .map(|p| format!("{} {}", p.label, p.annotation))
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(f, "{:?}: {}", self.chart_metric, chart)?;

        writeln!(f)?;
        writeln!(
            f,
            "{} ({}, {} theme, background {})",
            self.character,
            self.category,
            self.theme.css_class(),
            self.theme.background_var()
        )?;
        write!(f, "  \"{}\"", self.response.dialogue_text)
    }
}
