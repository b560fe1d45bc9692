//! Card Validator API Server
//!
//! Reports whether a payment-card number passes the Luhn checksum and which
//! card network it likely belongs to. Never contacts an issuer or payment
//! network.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use app::CardValidationService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub validation_service: Arc<CardValidationService>,
}

impl AppState {
    pub fn new(validation_service: CardValidationService) -> Self {
        Self {
            validation_service: Arc::new(validation_service),
        }
    }
}

/// Build the HTTP router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/validate",
            post(handlers::validate_card).fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,card_validator_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting card validator API...");

    let config = Config::from_env();
    let addr = config.socket_addr();

    let app = router(AppState::new(CardValidationService::new()));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
