//! JSON API surface
//!
//! Two endpoints drive the session controller: one per watched input
//! group of the page. Each request constructs a fresh controller, runs a
//! single transition, and serializes what that transition rendered.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::controller::{RenderOutcome, SessionState, UiController, UiEvent};
use crate::meteored::MeteoredClient;
use crate::models::Locality;
use crate::risk::DroneProfile;
use crate::table::ForecastTable;

/// Shared state behind the API routes
pub struct AppState {
    pub client: MeteoredClient,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/localidades", get(search_localities))
        .route("/pronostico", get(get_forecast))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text locality name
    #[serde(default)]
    pub texto: String,
}

#[derive(Debug, Deserialize)]
pub struct ForecastParams {
    /// Locality id from a prior search
    pub localidad: String,
    /// Drone profile selector value ("RTK" or "DJI")
    #[serde(default)]
    pub perfil: DroneProfile,
}

/// One locality selector option
#[derive(Debug, Serialize)]
pub struct SelectorOption {
    pub label: String,
    pub value: String,
}

impl From<&Locality> for SelectorOption {
    fn from(locality: &Locality) -> Self {
        Self {
            label: locality.selector_label(),
            value: locality.id.clone(),
        }
    }
}

/// What one transition rendered; regions the transition did not touch are
/// omitted from the body
#[derive(Debug, Serialize)]
pub struct RenderReply {
    pub state: SessionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectorOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<ForecastTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl RenderReply {
    fn new(state: SessionState, outcome: RenderOutcome) -> Self {
        match outcome {
            RenderOutcome::Selector { options, notice } => Self {
                state,
                options: Some(options.iter().map(SelectorOption::from).collect()),
                table: None,
                message: notice,
            },
            RenderOutcome::Table(table) => Self {
                state,
                options: None,
                table: Some(table),
                message: None,
            },
            RenderOutcome::Notice(text) => Self {
                state,
                options: None,
                table: None,
                message: Some(text),
            },
        }
    }
}

async fn search_localities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<RenderReply> {
    let mut controller = UiController::new(&state.client);
    let outcome = controller
        .handle_event(UiEvent::LocalityNameChanged(params.texto))
        .await;
    Json(RenderReply::new(controller.state(), outcome))
}

async fn get_forecast(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ForecastParams>,
) -> Json<RenderReply> {
    let mut controller = UiController::new(&state.client);
    let outcome = controller
        .handle_event(UiEvent::SelectionChanged {
            locality_id: params.localidad,
            profile: params.perfil,
        })
        .await;
    Json(RenderReply::new(controller.state(), outcome))
}
