//! Web server bootstrap

use anyhow::Result;
use axum::{Router, response::Html, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::api::{self, AppState};
use crate::config::MeteovueloConfig;
use crate::meteored::MeteoredClient;

/// The single page, embedded at build time
const INDEX_HTML: &str = include_str!("../assets/index.html");

pub async fn run(config: &MeteovueloConfig, client: MeteoredClient) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = Arc::new(AppState { client });

    let app = Router::new()
        .route("/", get(index))
        .nest("/api", api::router(state))
        .layer(cors);

    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        "Web server running at http://localhost:{}",
        config.server.port
    );
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
