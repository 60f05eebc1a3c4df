//! Data models for the Meteovuelo application
//!
//! This module contains the core domain models organized by concern:
//! - Locality: provider place-search results
//! - Forecast: per-hour weather records

pub mod forecast;
pub mod locality;

// Re-export all public types for convenient access
pub use forecast::HourlyForecastRecord;
pub use locality::Locality;
