//! UI session controller
//!
//! Explicit state machine behind the page's reactive inputs. The UI
//! runtime's change detection is only the event source: every watched
//! input change becomes one [`UiEvent`], each transition handler runs its
//! provider calls to completion, and nothing is memoized between
//! transitions. All session state lives in this struct; there is no
//! module-level mutable state.

use serde::Serialize;
use tracing::{debug, warn};

use crate::meteored::{MeteoredClient, xml};
use crate::models::Locality;
use crate::risk::{AnnotatedForecastRow, DroneProfile};
use crate::table::ForecastTable;
use crate::{MeteovueloError, Result};

/// Fixed text rendered when the forecast cannot be retrieved or decoded
pub const FORECAST_UNAVAILABLE_TEXT: &str = "No se pudo obtener la información del clima.";
/// Fixed text rendered when a search matches nothing (or fails)
pub const NO_RESULTS_TEXT: &str = "No se encontraron resultados para la búsqueda.";

/// Session states of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No input received yet
    Idle,
    /// A search populated the locality selector
    LocalitySearched,
    /// A locality id is selected, forecast pipeline running
    LocalitySelected,
    /// The forecast table is rendered
    ForecastRendered,
    /// The search matched nothing
    NoResults,
    /// The search call failed at the transport level
    SearchFailed,
    /// The forecast could not be fetched or decoded
    ForecastUnavailable,
}

/// One change of a watched UI input
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// The locality name text input changed
    LocalityNameChanged(String),
    /// The locality id selector and/or drone profile changed
    SelectionChanged {
        locality_id: String,
        profile: DroneProfile,
    },
}

/// What the transition asks the page to render
#[derive(Debug)]
pub enum RenderOutcome {
    /// Replace the locality selector options; `notice` fills the table
    /// region when the search produced nothing usable
    Selector {
        options: Vec<Locality>,
        notice: Option<&'static str>,
    },
    /// Render the forecast table
    Table(ForecastTable),
    /// Replace the table region with a fixed notice
    Notice(&'static str),
}

/// Controller for one UI session. Recreated per render cycle; holds no
/// result caches, so every transition recomputes from the provider.
pub struct UiController<'a> {
    client: &'a MeteoredClient,
    state: SessionState,
}

impl<'a> UiController<'a> {
    /// Create an idle controller backed by the given provider client
    #[must_use]
    pub fn new(client: &'a MeteoredClient) -> Self {
        Self {
            client,
            state: SessionState::Idle,
        }
    }

    /// Current session state
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run one transition to completion and return what to render
    pub async fn handle_event(&mut self, event: UiEvent) -> RenderOutcome {
        match event {
            UiEvent::LocalityNameChanged(text) => self.on_locality_name_changed(&text).await,
            UiEvent::SelectionChanged {
                locality_id,
                profile,
            } => self.on_selection_changed(&locality_id, profile).await,
        }
    }

    async fn on_locality_name_changed(&mut self, text: &str) -> RenderOutcome {
        if text.trim().is_empty() {
            debug!("Empty locality input, skipping search");
            self.state = SessionState::Idle;
            return RenderOutcome::Selector {
                options: Vec::new(),
                notice: None,
            };
        }

        match self.search_localities(text).await {
            Ok(options) => {
                debug!("Search for '{}' matched {} localities", text, options.len());
                self.state = SessionState::LocalitySearched;
                RenderOutcome::Selector {
                    options,
                    notice: None,
                }
            }
            Err(MeteovueloError::EmptyResult) => {
                self.state = SessionState::NoResults;
                RenderOutcome::Selector {
                    options: Vec::new(),
                    notice: Some(NO_RESULTS_TEXT),
                }
            }
            // A failed search degrades to the empty-result rendering; the
            // transport detail goes to the log only.
            Err(e) => {
                warn!("Locality search failed: {}", e);
                self.state = SessionState::SearchFailed;
                RenderOutcome::Selector {
                    options: Vec::new(),
                    notice: Some(NO_RESULTS_TEXT),
                }
            }
        }
    }

    async fn on_selection_changed(
        &mut self,
        locality_id: &str,
        profile: DroneProfile,
    ) -> RenderOutcome {
        self.state = SessionState::LocalitySelected;

        match self.render_forecast(locality_id, profile).await {
            Ok(table) => {
                debug!(
                    "Rendered forecast for locality {} ({} rows)",
                    locality_id, table.total_rows
                );
                self.state = SessionState::ForecastRendered;
                RenderOutcome::Table(table)
            }
            Err(e) => {
                warn!(
                    "Forecast pipeline failed for locality {}: {}",
                    locality_id, e
                );
                self.state = SessionState::ForecastUnavailable;
                RenderOutcome::Notice(FORECAST_UNAVAILABLE_TEXT)
            }
        }
    }

    async fn search_localities(&self, text: &str) -> Result<Vec<Locality>> {
        let localities = self.client.search_localities(text).await?;
        if localities.is_empty() {
            return Err(MeteovueloError::EmptyResult);
        }
        Ok(localities)
    }

    /// Fetch → parse → classify → tabulate, from scratch
    async fn render_forecast(
        &self,
        locality_id: &str,
        profile: DroneProfile,
    ) -> Result<ForecastTable> {
        let payload = self.client.fetch_forecast(locality_id).await?;
        let records = xml::parse_forecast(&payload)?;
        let rows: Vec<AnnotatedForecastRow> = records
            .into_iter()
            .map(|record| AnnotatedForecastRow::annotate(record, profile))
            .collect();
        Ok(ForecastTable::build(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;

    #[test]
    fn test_controller_starts_idle() {
        let client = MeteoredClient::new(ProviderConfig::default()).unwrap();
        let controller = UiController::new(&client);
        assert_eq!(controller.state(), SessionState::Idle);
    }

    #[tokio::test]
    async fn test_blank_input_issues_no_search() {
        // An unroutable base URL would fail any request; blank input must
        // short-circuit before reaching the transport.
        let config = ProviderConfig {
            search_base_url: "http://127.0.0.1:1".to_string(),
            ..ProviderConfig::default()
        };
        let client = MeteoredClient::new(config).unwrap();
        let mut controller = UiController::new(&client);

        let outcome = controller
            .handle_event(UiEvent::LocalityNameChanged("   ".to_string()))
            .await;

        assert_eq!(controller.state(), SessionState::Idle);
        match outcome {
            RenderOutcome::Selector { options, notice } => {
                assert!(options.is_empty());
                assert!(notice.is_none());
            }
            other => panic!("expected cleared selector, got {other:?}"),
        }
    }
}
