//! Axum server setup, shared application state, and graceful shutdown.
//!
//! Contains [`AppState`] (the `Arc`-shared, read-only state holding the
//! resolved config, profiles and uptime), [`build_router`] for the Axum
//! router with its middleware layers, and [`shutdown_signal`] for
//! SIGTERM / Ctrl+C handling.

use std::sync::Arc;
use std::time::Instant;

use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::model::AppConfig;
use crate::config::profile::Profiles;
use crate::config::ResolvedConfig;
use crate::cors::CorsPolicy;

/// Resolved once before the listener binds; never mutated afterwards.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub profiles: Profiles,
    pub layers: Vec<String>,
    pub start_time: Instant,
}

impl AppState {
    #[must_use]
    pub fn new(resolved: ResolvedConfig, profiles: Profiles) -> Self {
        Self {
            config: resolved.config,
            profiles,
            layers: resolved.layers,
            start_time: Instant::now(),
        }
    }
}

pub fn build_router(state: Arc<AppState>, max_body: usize) -> Router {
    let cors = CorsPolicy::from_settings(&state.config.cors).into_layer();

    Router::new()
        .route("/health", get(api::liveness::liveness_handler))
        .nest("/config", api::config_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // Cors answers preflights itself, so it must sit directly on the routes
                .layer(RequestBodyLimitLayer::new(max_body))
                .layer(cors),
        )
        .with_state(state)
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C"),
        () = terminate => tracing::info!("received SIGTERM"),
    }
}
