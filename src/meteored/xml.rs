//! Forecast XML payload decoding
//!
//! The provider's v2.0 forecast is an XML report: a `<location>` element
//! wrapping `<day>` elements, each with `<hour>` children carrying the
//! measurements as attributes. Decoding flattens the document into hourly
//! records, days in document order and hours in document order within each
//! day. A missing expected child or an unparsable numeric attribute fails
//! the whole parse; the caller surfaces it, nothing is patched over.

use quick_xml::de::from_str;
use serde::Deserialize;

use crate::models::HourlyForecastRecord;
use crate::{MeteovueloError, Result};

/// Forecast XML structure for deserialization
#[derive(Debug, Deserialize)]
pub struct Report {
    pub location: ReportLocation,
}

#[derive(Debug, Deserialize)]
pub struct ReportLocation {
    #[serde(rename = "@city")]
    pub city: Option<String>,
    #[serde(rename = "day", default)]
    pub days: Vec<DayElement>,
}

#[derive(Debug, Deserialize)]
pub struct DayElement {
    #[serde(rename = "@value")]
    pub date: String,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "hour", default)]
    pub hours: Vec<HourElement>,
}

#[derive(Debug, Deserialize)]
pub struct HourElement {
    #[serde(rename = "@value")]
    pub hour: String,
    pub temp: ValueAttr,
    pub symbol: SymbolAttr,
    pub wind: WindAttr,
    #[serde(rename = "wind-gusts")]
    pub wind_gusts: ValueAttr,
    pub rain: ValueAttr,
}

#[derive(Debug, Deserialize)]
pub struct ValueAttr {
    #[serde(rename = "@value")]
    pub value: f64,
}

#[derive(Debug, Deserialize)]
pub struct SymbolAttr {
    #[serde(rename = "@desc")]
    pub desc: String,
}

#[derive(Debug, Deserialize)]
pub struct WindAttr {
    #[serde(rename = "@value")]
    pub value: f64,
    #[serde(rename = "@dir")]
    pub dir: String,
}

/// Parse a forecast XML payload into hourly records, preserving the
/// (day, hour) nesting order of the document.
pub fn parse_forecast(xml_content: &str) -> Result<Vec<HourlyForecastRecord>> {
    let report: Report = from_str(xml_content).map_err(|e| {
        MeteovueloError::malformed_payload(format!("failed to decode forecast XML: {e}"))
    })?;

    let mut records = Vec::new();
    for day in &report.location.days {
        for hour in &day.hours {
            records.push(HourlyForecastRecord {
                date: day.date.clone(),
                hour: hour.hour.clone(),
                temperature_c: hour.temp.value,
                weather_description: hour.symbol.desc.clone(),
                wind_speed_kmh: hour.wind.value,
                wind_direction: hour.wind.dir.clone(),
                wind_gusts_kmh: hour.wind_gusts.value,
                rainfall_mm: hour.rain.value,
            });
        }
    }

    Ok(records)
}
