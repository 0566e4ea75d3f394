//! Serde data structures for the application configuration.
//!
//! Contains [`AppConfig`] (the root, bound from the `app` namespace) and
//! its groups: [`CorsSettings`], [`SecuritySettings`], [`CacheSettings`],
//! [`RateLimitSettings`] and [`MonitoringSettings`]. Every field has a
//! default so a partial layer tree binds cleanly. Keys are kebab-case;
//! unknown keys are ignored here and reported by the resolver.

use serde::{Deserialize, Serialize};

/// Placeholder JWT secret shipped with the template. Must not be used
/// outside the `dev` profile.
pub const DEFAULT_JWT_SECRET: &str = "dev-secret-key-change-in-production";

fn default_name() -> String {
    "CS301 Backend Template".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_description() -> String {
    "A standardized Spring Boot backend service template".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_allowed_methods() -> Vec<String> {
    ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_allowed_headers() -> Vec<String> {
    vec!["*".to_string()]
}

const fn default_true() -> bool {
    true
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

const fn default_jwt_expiration() -> i64 {
    86_400
}

const fn default_cache_ttl() -> i64 {
    300
}

const fn default_requests_per_minute() -> i64 {
    100
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub description: String,
    pub environment: String,
    pub debug_mode: bool,
    pub cors: CorsSettings,
    pub security: SecuritySettings,
    pub cache: CacheSettings,
    pub rate_limiting: RateLimitSettings,
    pub monitoring: MonitoringSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            description: default_description(),
            environment: default_environment(),
            debug_mode: false,
            cors: CorsSettings::default(),
            security: SecuritySettings::default(),
            cache: CacheSettings::default(),
            rate_limiting: RateLimitSettings::default(),
            monitoring: MonitoringSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CorsSettings {
    /// Origin patterns; `*` matches any run of characters.
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            allowed_methods: default_allowed_methods(),
            allowed_headers: default_allowed_headers(),
            allow_credentials: default_true(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SecuritySettings {
    pub jwt: JwtSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct JwtSettings {
    pub secret: String,
    /// Token lifetime in seconds.
    pub expiration: i64,
}

impl Default for JwtSettings {
    fn default() -> Self {
        Self {
            secret: default_jwt_secret(),
            expiration: default_jwt_expiration(),
        }
    }
}

impl JwtSettings {
    #[must_use]
    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CacheSettings {
    pub enabled: bool,
    /// Entry time-to-live in seconds.
    pub ttl: i64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            ttl: default_cache_ttl(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RateLimitSettings {
    pub enabled: bool,
    pub requests_per_minute: i64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            requests_per_minute: default_requests_per_minute(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MonitoringSettings {
    pub metrics_enabled: bool,
    pub tracing_enabled: bool,
}
