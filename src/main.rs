//! Farelink service entrypoint.

use anyhow::Context;
use farelink::api::rest::{create_router, AppState};
use farelink::application::services::{EstimationEngine, RoutePlanner};
use farelink::config::Settings;
use farelink::infrastructure::directions::OrsClient;
use farelink::infrastructure::geocoding::GeocodingService;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load().context("failed to load settings")?;
    let providers = settings
        .provider_table()
        .context("invalid provider configuration")?;

    let directions = Arc::new(
        OrsClient::new(
            &settings.directions.base_url,
            &settings.directions.api_key,
            settings.directions.timeout_ms,
        )
        .context("failed to build directions client")?,
    );
    let geocoder = Arc::new(
        GeocodingService::new(
            &settings.geocoding.base_url,
            settings.geocoding.api_key.clone(),
            settings.geocoding.timeout_ms,
        )
        .context("failed to build geocoding client")?,
    );

    let estimator = Arc::new(EstimationEngine::with_defaults(
        providers,
        RoutePlanner::new(directions),
    ));

    let state = Arc::new(AppState {
        estimator,
        geocoder,
    });
    let router = create_router(state);

    let addr = settings.bind_addr();
    tracing::info!(%addr, "starting fare comparison service");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router)
        .await
        .context("server error")?;

    Ok(())
}
