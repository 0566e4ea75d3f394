//! `APP_*` environment variable binding.
//!
//! Each supported variable maps to a fixed path in the `app` tree and a
//! value kind; see [`BINDINGS`]. Values are parsed here so a malformed
//! variable is reported by name instead of as an opaque serde error.
//! Unknown `APP_*` variables are ignored.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::config::ConfigSource;
use crate::error::TemplateError;

pub const PREFIX: &str = "APP_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Str,
    Bool,
    Int,
    /// Comma-separated list; entries are trimmed and blanks dropped.
    List,
}

pub struct Binding {
    pub var: &'static str,
    pub path: &'static [&'static str],
    pub kind: ValueKind,
}

const fn bind(var: &'static str, path: &'static [&'static str], kind: ValueKind) -> Binding {
    Binding { var, path, kind }
}

pub const BINDINGS: &[Binding] = &[
    bind("APP_NAME", &["name"], ValueKind::Str),
    bind("APP_VERSION", &["version"], ValueKind::Str),
    bind("APP_DESCRIPTION", &["description"], ValueKind::Str),
    bind("APP_ENVIRONMENT", &["environment"], ValueKind::Str),
    bind("APP_DEBUG_MODE", &["debug-mode"], ValueKind::Bool),
    bind("APP_CORS_ALLOWED_ORIGINS", &["cors", "allowed-origins"], ValueKind::List),
    bind("APP_CORS_ALLOWED_METHODS", &["cors", "allowed-methods"], ValueKind::List),
    bind("APP_CORS_ALLOWED_HEADERS", &["cors", "allowed-headers"], ValueKind::List),
    bind("APP_CORS_ALLOW_CREDENTIALS", &["cors", "allow-credentials"], ValueKind::Bool),
    bind("APP_SECURITY_JWT_SECRET", &["security", "jwt", "secret"], ValueKind::Str),
    bind("APP_SECURITY_JWT_EXPIRATION", &["security", "jwt", "expiration"], ValueKind::Int),
    bind("APP_CACHE_ENABLED", &["cache", "enabled"], ValueKind::Bool),
    bind("APP_CACHE_TTL", &["cache", "ttl"], ValueKind::Int),
    bind("APP_RATE_LIMITING_ENABLED", &["rate-limiting", "enabled"], ValueKind::Bool),
    bind(
        "APP_RATE_LIMITING_REQUESTS_PER_MINUTE",
        &["rate-limiting", "requests-per-minute"],
        ValueKind::Int,
    ),
    bind("APP_MONITORING_METRICS_ENABLED", &["monitoring", "metrics-enabled"], ValueKind::Bool),
    bind("APP_MONITORING_TRACING_ENABLED", &["monitoring", "tracing-enabled"], ValueKind::Bool),
];

/// Snapshot of the `APP_*` variables taken at construction.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: BTreeMap<String, String>,
}

impl EnvSource {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build from explicit key/value pairs (tests, embedding).
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| k.starts_with(PREFIX))
            .collect();
        Self { vars }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    fn to_tree(&self) -> Result<Option<Value>, TemplateError> {
        let mut root = Map::new();
        for binding in BINDINGS {
            let Some(raw) = self.get(binding.var) else {
                continue;
            };
            let value = parse_value(binding.var, raw, binding.kind)?;
            insert_path(&mut root, binding.path, value);
        }
        Ok((!root.is_empty()).then_some(Value::Object(root)))
    }
}

fn parse_value(var: &str, raw: &str, kind: ValueKind) -> Result<Value, TemplateError> {
    let invalid = |message: String| TemplateError::EnvVar {
        name: var.to_string(),
        message,
    };

    match kind {
        ValueKind::Str => Ok(Value::String(raw.to_string())),
        ValueKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(Value::Bool(true)),
            "false" | "off" | "no" | "0" => Ok(Value::Bool(false)),
            _ => Err(invalid(format!(
                "'{raw}' is not a boolean (expected true/on/yes/1 or false/off/no/0)"
            ))),
        },
        ValueKind::Int => raw
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| invalid(format!("'{raw}' is not an integer"))),
        ValueKind::List => Ok(Value::Array(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| Value::String(s.to_string()))
                .collect(),
        )),
    }
}

fn insert_path(root: &mut Map<String, Value>, path: &[&str], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut node = root;
    for key in parents {
        let entry = node
            .entry((*key).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        let Value::Object(map) = entry else {
            return;
        };
        node = map;
    }
    node.insert((*last).to_string(), value);
}

#[async_trait]
impl ConfigSource for EnvSource {
    fn name(&self) -> &str {
        "env"
    }

    async fn load(&self) -> Result<Option<Value>, TemplateError> {
        self.to_tree()
    }
}
