//! `GET /health` process liveness probe.
//!
//! Reports that the process is up, how long it has been running and
//! which configuration layers it was started from. It does not judge
//! the configuration; that is `GET /config/health`.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::server::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LivenessResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub application: String,
    pub sources: Vec<String>,
}

pub async fn liveness_handler(State(state): State<Arc<AppState>>) -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "UP".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        application: state.config.name.clone(),
        sources: state.layers.clone(),
    })
}
