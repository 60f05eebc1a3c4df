//! Flight risk classification
//!
//! Maps wind-gust and rainfall magnitudes to qualitative risk indicators,
//! parameterized by the drone profile the operator flies. Both classifiers
//! are pure step functions over finite numeric input: bands are half-open
//! on the lower bound, and a value exactly at a band's upper boundary
//! belongs to the next band up.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::HourlyForecastRecord;

/// A named set of wind/rain sensitivity thresholds corresponding to a
/// class of aircraft
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DroneProfile {
    /// Heavy industrial quad-rotor ("Matrice 300 RTK")
    #[default]
    #[serde(rename = "RTK")]
    StandardHeavy,
    /// Light multirotor ("DJI M")
    #[serde(rename = "DJI")]
    LightMulti,
}

impl DroneProfile {
    /// Label shown on the profile selector
    #[must_use]
    pub fn display_label(&self) -> &'static str {
        match self {
            DroneProfile::StandardHeavy => "Matrice 300 RTK",
            DroneProfile::LightMulti => "DJI M",
        }
    }
}

/// Wind risk levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindRisk {
    Favorable,
    Caution,
    Unfavorable,
}

/// Rain risk levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RainRisk {
    Favorable,
    Unfavorable,
}

impl WindRisk {
    /// Color indicator rendered in the table
    #[must_use]
    pub fn indicator(&self) -> &'static str {
        match self {
            WindRisk::Favorable => "\u{1F7E2}",   // green circle
            WindRisk::Caution => "\u{1F7E1}",     // yellow circle
            WindRisk::Unfavorable => "\u{1F534}", // red circle
        }
    }
}

impl RainRisk {
    /// Color indicator rendered in the table
    #[must_use]
    pub fn indicator(&self) -> &'static str {
        match self {
            RainRisk::Favorable => "\u{1F7E2}",
            RainRisk::Unfavorable => "\u{1F534}",
        }
    }
}

impl fmt::Display for WindRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindRisk::Favorable => write!(f, "Favorable"),
            WindRisk::Caution => write!(f, "Caution"),
            WindRisk::Unfavorable => write!(f, "Unfavorable"),
        }
    }
}

impl fmt::Display for RainRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RainRisk::Favorable => write!(f, "Favorable"),
            RainRisk::Unfavorable => write!(f, "Unfavorable"),
        }
    }
}

/// Classify wind gusts for the given profile
#[must_use]
pub fn wind_risk(gusts_kmh: f64, profile: DroneProfile) -> WindRisk {
    let (caution_from, unfavorable_from) = match profile {
        DroneProfile::StandardHeavy => (30.0, 50.0),
        DroneProfile::LightMulti => (10.0, 30.0),
    };

    if gusts_kmh < caution_from {
        WindRisk::Favorable
    } else if gusts_kmh < unfavorable_from {
        WindRisk::Caution
    } else {
        WindRisk::Unfavorable
    }
}

/// Classify rainfall for the given profile
#[must_use]
pub fn rain_risk(rainfall_mm: f64, profile: DroneProfile) -> RainRisk {
    let unfavorable_from = match profile {
        DroneProfile::StandardHeavy => 1.0,
        DroneProfile::LightMulti => 0.5,
    };

    if rainfall_mm < unfavorable_from {
        RainRisk::Favorable
    } else {
        RainRisk::Unfavorable
    }
}

/// Hourly forecast record plus its derived risk indicators
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedForecastRow {
    pub record: HourlyForecastRecord,
    pub wind_risk: WindRisk,
    pub rain_risk: RainRisk,
}

impl AnnotatedForecastRow {
    /// Annotate a record under the given profile
    #[must_use]
    pub fn annotate(record: HourlyForecastRecord, profile: DroneProfile) -> Self {
        let wind_risk = wind_risk(record.wind_gusts_kmh, profile);
        let rain_risk = rain_risk(record.rainfall_mm, profile);
        Self {
            record,
            wind_risk,
            rain_risk,
        }
    }
}
