//! SPS gateway wiring demo.
//!
//! Wires the in-memory adapters behind the payment router. The order store
//! starts empty and nothing fills it, so callbacks answer `Reponse=ERROR`
//! and checkouts answer 404. Shops embedding the gateway build their own
//! `PaymentAppState` over their order store.

use std::sync::Arc;
use std::time::Duration;

use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use sps_gateway::adapters::http::{payment_router, PaymentAppState};
use sps_gateway::adapters::{InMemoryOrderRepository, StaticSettingsProvider, TracingGatewayLogger};
use sps_gateway::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    config.validate()?;

    let settings = StaticSettingsProvider::from_config(&config.gateway);
    if !config.gateway.enabled {
        tracing::warn!("SPS gateway is disabled; checkout endpoints will answer 503");
    }
    tracing::warn!(
        "Demo order store is empty; callbacks will answer Reponse=ERROR until a shop repository is wired"
    );

    let state = PaymentAppState::new(
        Arc::new(InMemoryOrderRepository::new()),
        Arc::new(settings),
        Arc::new(TracingGatewayLogger::new()),
    );

    let app = payment_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "SPS gateway listening");

    axum::serve(listener, app).await?;
    Ok(())
}
