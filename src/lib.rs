//! Meteovuelo - hourly wind/rain flight-risk forecasts for drone operators
//!
//! This library provides the core functionality behind the single-page
//! viewer: provider lookups, forecast decoding, risk classification and
//! the UI session state machine.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod meteored;
pub mod models;
pub mod risk;
pub mod table;
pub mod web;

// Re-export core types for public API
pub use config::MeteovueloConfig;
pub use controller::{RenderOutcome, SessionState, UiController, UiEvent};
pub use error::MeteovueloError;
pub use meteored::MeteoredClient;
pub use models::{HourlyForecastRecord, Locality};
pub use risk::{AnnotatedForecastRow, DroneProfile, RainRisk, WindRisk};
pub use table::ForecastTable;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, MeteovueloError>;
