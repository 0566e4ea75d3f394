//! Configuration health verdict.
//!
//! [`evaluate`] is a pure function of the resolved [`AppConfig`] and the
//! active [`Profiles`]. It checks that the identity fields are present
//! and that no non-`dev` profile runs with the published default JWT
//! secret. The verdict is data: `GET /config/health` always answers 200
//! with it in the body.

use serde::{Deserialize, Serialize};

use crate::config::model::AppConfig;
use crate::config::profile::{Profiles, DEV};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "MISSING")]
    Missing,
}

impl FieldStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Missing => "MISSING",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecretStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "OK - Development environment")]
    Development,
    #[serde(rename = "INSECURE - Using default development secret")]
    Insecure,
}

impl SecretStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Development => "OK - Development environment",
            Self::Insecure => "INSECURE - Using default development secret",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Healthy,
    Unhealthy,
}

impl Verdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "HEALTHY",
            Self::Unhealthy => "UNHEALTHY",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigHealth {
    pub name: FieldStatus,
    pub version: FieldStatus,
    pub jwt_secret: SecretStatus,
    pub status: Verdict,
}

impl ConfigHealth {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == Verdict::Healthy
    }
}

/// Blank means empty after stripping control characters and ASCII space;
/// other Unicode whitespace counts as content.
fn field_status(value: &str) -> FieldStatus {
    if value.trim_matches(|c: char| c <= ' ').is_empty() {
        FieldStatus::Missing
    } else {
        FieldStatus::Ok
    }
}

#[must_use]
pub fn evaluate(config: &AppConfig, profiles: &Profiles) -> ConfigHealth {
    let name = field_status(&config.name);
    let version = field_status(&config.version);

    let jwt_secret = match profiles.primary() {
        Some(primary) if primary != DEV => {
            if config.security.jwt.uses_default_secret() {
                SecretStatus::Insecure
            } else {
                SecretStatus::Ok
            }
        }
        _ => SecretStatus::Development,
    };

    let healthy = name == FieldStatus::Ok
        && version == FieldStatus::Ok
        && jwt_secret != SecretStatus::Insecure;

    ConfigHealth {
        name,
        version,
        jwt_secret,
        status: if healthy {
            Verdict::Healthy
        } else {
            Verdict::Unhealthy
        },
    }
}
