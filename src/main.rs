use anyhow::Result;
use tracing_subscriber::EnvFilter;

use meteovuelo::config::MeteovueloConfig;
use meteovuelo::meteored::MeteoredClient;
use meteovuelo::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = MeteovueloConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    tracing::info!("Starting meteovuelo v{}", meteovuelo::VERSION);

    let client = MeteoredClient::new(config.provider.clone())?;
    web::run(&config, client).await
}
