//! Series for the hourly forecast chart.

pub use bfdi_core::ChartMetric;
use bfdi_core::ClockFormat;
use serde::Serialize;

use crate::types::ForecastPeriod;

/// Viewports at or below this width only label every other point
pub const COMPACT_WIDTH_PX: u32 = 600;

fn metric_value(metric: ChartMetric, period: &ForecastPeriod) -> i32 {
    match metric {
        ChartMetric::Temperature => period.temperature,
        ChartMetric::Precipitation => i32::from(period.precipitation_chance),
        ChartMetric::Humidity => i32::from(period.humidity),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    /// Axis label; empty when suppressed in compact mode
    pub label: String,
    pub value: i32,
    /// Data label, e.g. "72°" or "40%"; empty when suppressed
    pub annotation: String,
}

/// Build chart points for `metric`. In compact mode every odd-indexed point
/// loses its labels so they don't overlap.
pub fn chart_points(
    periods: &[ForecastPeriod],
    metric: ChartMetric,
    clock: ClockFormat,
    compact: bool,
) -> Vec<ChartPoint> {
    periods
        .iter()
        .enumerate()
        .map(|(idx, period)| {
            let value = metric_value(metric, period);
            if compact && idx % 2 == 1 {
                return ChartPoint {
                    label: String::new(),
                    value,
                    annotation: String::new(),
                };
            }
            ChartPoint {
                label: clock.format_hour_label(period.start_time.time()),
                value,
                annotation: format!("{}{}", value, metric.suffix()),
            }
        })
        .collect()
}

pub fn is_compact(viewport_width: u32) -> bool {
    viewport_width <= COMPACT_WIDTH_PX
}
