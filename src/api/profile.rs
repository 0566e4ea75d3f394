//! Active profile description.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::config::profile::{describe, Profiles};
use crate::server::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub active_profiles: Vec<String>,
    pub default_profiles: Vec<String>,
    pub environment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

impl ProfileResponse {
    #[must_use]
    pub fn build(profiles: &Profiles, environment: &str) -> Self {
        let mut response = Self {
            active_profiles: profiles.active().to_vec(),
            default_profiles: profiles.default_profiles().to_vec(),
            environment: environment.to_string(),
            primary_profile: None,
            description: None,
            features: None,
        };

        if let Some(primary) = profiles.primary() {
            let descriptor = describe(primary);
            response.primary_profile = Some(primary.to_string());
            response.description = Some(descriptor.description.to_string());
            response.features = descriptor
                .features
                .map(|f| f.iter().map(|s| (*s).to_string()).collect());
        }

        response
    }
}

pub async fn profile_handler(State(state): State<Arc<AppState>>) -> Json<ProfileResponse> {
    Json(ProfileResponse::build(
        &state.profiles,
        &state.config.environment,
    ))
}
