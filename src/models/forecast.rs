//! Hourly forecast record model

use serde::{Deserialize, Serialize};

/// One hour of forecast data, as provided by one `<hour>` element of the
/// provider payload. Date and hour stay provider-defined tokens; no
/// calendar arithmetic happens on them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HourlyForecastRecord {
    /// Date token of the containing day (provider format)
    pub date: String,
    /// Hour token within the day (provider format)
    pub hour: String,
    /// Temperature in °C
    pub temperature_c: f64,
    /// Human-readable weather description
    pub weather_description: String,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
    /// Wind direction as provider text (e.g. "Norte")
    pub wind_direction: String,
    /// Wind gust speed in km/h
    pub wind_gusts_kmh: f64,
    /// Rainfall amount in mm
    pub rainfall_mm: f64,
}
