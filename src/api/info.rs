//! Redacted configuration projection.
//!
//! The response is its own struct rather than a filtered [`AppConfig`]
//! so that a new config field is never exposed by accident. Origins and
//! the JWT settings are deliberately absent.
//!
//! [`AppConfig`]: crate::config::model::AppConfig

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::config::model::AppConfig;
use crate::config::profile::Profiles;
use crate::server::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub environment: String,
    pub debug_mode: bool,
    pub active_profiles: Vec<String>,
    pub default_profiles: Vec<String>,
    pub cors: CorsInfo,
    pub cache: CacheInfo,
    pub rate_limiting: RateLimitInfo,
    pub monitoring: MonitoringInfo,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsInfo {
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CacheInfo {
    pub enabled: bool,
    pub ttl: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitInfo {
    pub enabled: bool,
    pub requests_per_minute: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringInfo {
    pub metrics_enabled: bool,
    pub tracing_enabled: bool,
}

impl InfoResponse {
    #[must_use]
    pub fn project(config: &AppConfig, profiles: &Profiles) -> Self {
        Self {
            name: config.name.clone(),
            version: config.version.clone(),
            description: config.description.clone(),
            environment: config.environment.clone(),
            debug_mode: config.debug_mode,
            active_profiles: profiles.active().to_vec(),
            default_profiles: profiles.default_profiles().to_vec(),
            cors: CorsInfo {
                allowed_methods: config.cors.allowed_methods.clone(),
                allowed_headers: config.cors.allowed_headers.clone(),
                allow_credentials: config.cors.allow_credentials,
            },
            cache: CacheInfo {
                enabled: config.cache.enabled,
                ttl: config.cache.ttl,
            },
            rate_limiting: RateLimitInfo {
                enabled: config.rate_limiting.enabled,
                requests_per_minute: config.rate_limiting.requests_per_minute,
            },
            monitoring: MonitoringInfo {
                metrics_enabled: config.monitoring.metrics_enabled,
                tracing_enabled: config.monitoring.tracing_enabled,
            },
        }
    }
}

pub async fn info_handler(State(state): State<Arc<AppState>>) -> Json<InfoResponse> {
    Json(InfoResponse::project(&state.config, &state.profiles))
}
