//! meteored.com.ar provider client
//!
//! HTTP client for the provider's locality search (JSON) and hourly
//! forecast (XML) endpoints. Responses are decoded through typed structs;
//! anything that does not fit the declared shape is a malformed payload,
//! never a silently-propagated missing value.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::ProviderConfig;
use crate::models::Locality;
use crate::{MeteovueloError, Result};

pub mod xml;

/// Client for the provider's search and forecast endpoints.
///
/// Cheap to clone; holds only the reqwest client and endpoint settings.
#[derive(Debug, Clone)]
pub struct MeteoredClient {
    client: Client,
    config: ProviderConfig,
}

/// Search response body: `{"localidad": [..]}`, field absent on no match
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    localidad: Vec<LocalityEntry>,
}

#[derive(Debug, Deserialize)]
struct LocalityEntry {
    id: String,
    nombre: String,
    #[serde(default)]
    jerarquia: Vec<String>,
}

impl From<LocalityEntry> for Locality {
    fn from(entry: LocalityEntry) -> Self {
        Locality::new(entry.id, entry.nombre, entry.jerarquia)
    }
}

impl MeteoredClient {
    /// Create a new provider client
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("Meteovuelo/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// Search localities matching a free-text name.
    ///
    /// Returns the decoded locality list; an absent `localidad` field is an
    /// empty list, a non-200 status is a transport error.
    #[instrument(skip(self))]
    pub async fn search_localities(&self, text: &str) -> Result<Vec<Locality>> {
        let url = format!(
            "{}?lang={}&texto={}",
            self.config.search_base_url,
            self.config.lang,
            urlencoding::encode(text)
        );
        debug!("Locality search request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() != StatusCode::OK {
            warn!(
                "Locality search request failed with status {}",
                response.status()
            );
            return Err(MeteovueloError::transport(format!(
                "locality search returned status {}",
                response.status()
            )));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            MeteovueloError::malformed_payload(format!("invalid locality search response: {e}"))
        })?;

        Ok(body.localidad.into_iter().map(Locality::from).collect())
    }

    /// Fetch the raw forecast XML for a locality id.
    #[instrument(skip(self))]
    pub async fn fetch_forecast(&self, locality_id: &str) -> Result<String> {
        let url = format!(
            "{}?api_lang={}&localidad={}&affiliate_id={}&v=2.0",
            self.config.forecast_base_url,
            self.config.lang,
            urlencoding::encode(locality_id),
            self.config.affiliate_id
        );
        debug!("Forecast request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() != StatusCode::OK {
            warn!(
                "Forecast request for locality {} failed with status {}",
                locality_id,
                response.status()
            );
            return Err(MeteovueloError::transport(format!(
                "forecast fetch returned status {}",
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}
