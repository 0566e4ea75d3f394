//! `GET /config/health` handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::health::{evaluate, ConfigHealth, Verdict};
use crate::server::AppState;

/// Always 200; an UNHEALTHY verdict is reported in the body only. Startup
/// already warns once, so per-request logging stays at debug.
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<ConfigHealth> {
    let health = evaluate(&state.config, &state.profiles);
    if health.status == Verdict::Unhealthy {
        tracing::debug!(
            name = ?health.name,
            version = ?health.version,
            jwt_secret = ?health.jwt_secret,
            "configuration health check reports UNHEALTHY"
        );
    }
    Json(health)
}
