use bfdi_weather::is_evening;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Page theme driven by the current category and time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Day,
    Night,
    Storm,
    Snowy,
}

impl Theme {
    /// Weather themes win over the day/night cycle.
    pub fn select(category: Category, time: NaiveTime) -> Self {
        match category {
            Category::Raining | Category::Foggy | Category::Windy => Theme::Storm,
            Category::Snowy => Theme::Snowy,
            _ if is_evening(time) => Theme::Night,
            _ => Theme::Day,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Day => "light",
            Theme::Night => "dark",
            Theme::Storm => "storm",
            Theme::Snowy => "snowy",
        }
    }

    /// CSS custom property holding the page background
    pub fn background_var(&self) -> &'static str {
        match self {
            Theme::Day => "--daytime",
            Theme::Night => "--nighttime",
            Theme::Storm => "--stormtime",
            Theme::Snowy => "--snowtime",
        }
    }
}
