//! Read-only configuration endpoints, nested under `/config`.
//!
//! - `GET /config/info` -- redacted view of the resolved configuration.
//! - `GET /config/profile` -- active/default profiles and what they mean.
//! - `GET /config/health` -- configuration health verdict (always 200).
//!
//! [`liveness`] serves the process-level `GET /health` probe.

mod health;
mod info;
pub mod liveness;
mod profile;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::server::AppState;

pub use info::{CacheInfo, CorsInfo, InfoResponse, MonitoringInfo, RateLimitInfo};
pub use profile::ProfileResponse;

/// Build the config sub-router (nested under `/config`).
pub fn config_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/info", get(info::info_handler))
        .route("/profile", get(profile::profile_handler))
        .route("/health", get(health::health_handler))
}
