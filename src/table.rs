//! Forecast table view model
//!
//! Projects annotated forecast rows into the display table: fixed column
//! order, formatted cells, pages of eight rows. Pure reshape, no
//! computation beyond formatting.

use serde::Serialize;

use crate::risk::AnnotatedForecastRow;

/// Rows per table page
pub const PAGE_SIZE: usize = 8;

/// Display column headers, in fixed order
pub const COLUMNS: [&str; 10] = [
    "Fecha",
    "Hora",
    "Temperatura (°C)",
    "Descripción del clima",
    "Velocidad del viento (km/h)",
    "Dirección del viento",
    "Ráfagas de viento (km/h)",
    "Lluvia (mm)",
    "RV",
    "LL",
];

/// One display-ready row: cells in [`COLUMNS`] order
pub type DisplayRow = Vec<String>;

/// Display-ready, paginated forecast table
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ForecastTable {
    /// Column headers in display order
    pub columns: Vec<&'static str>,
    /// Rows split into pages of [`PAGE_SIZE`]; the last page may be shorter
    pub pages: Vec<Vec<DisplayRow>>,
    /// Rows per page
    pub page_size: usize,
    /// Total row count across all pages
    pub total_rows: usize,
}

impl ForecastTable {
    /// Build the table from annotated rows, preserving their order
    #[must_use]
    pub fn build(rows: &[AnnotatedForecastRow]) -> Self {
        let display_rows: Vec<DisplayRow> = rows.iter().map(project_row).collect();
        let total_rows = display_rows.len();

        let pages = display_rows
            .chunks(PAGE_SIZE)
            .map(<[DisplayRow]>::to_vec)
            .collect();

        Self {
            columns: COLUMNS.to_vec(),
            pages,
            page_size: PAGE_SIZE,
            total_rows,
        }
    }

    /// Number of pages in the table
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_rows == 0
    }
}

/// Project one annotated row into its display cells
fn project_row(row: &AnnotatedForecastRow) -> DisplayRow {
    let r = &row.record;
    vec![
        r.date.clone(),
        r.hour.clone(),
        format_number(r.temperature_c),
        r.weather_description.clone(),
        format_number(r.wind_speed_kmh),
        r.wind_direction.clone(),
        format_number(r.wind_gusts_kmh),
        format_number(r.rainfall_mm),
        row.wind_risk.indicator().to_string(),
        row.rain_risk.indicator().to_string(),
    ]
}

/// Format a numeric cell without a trailing `.0` on whole values
fn format_number(value: f64) -> String {
    format!("{value}")
}
