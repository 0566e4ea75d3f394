//! Configuration loading and resolution.
//!
//! Defines the [`ConfigSource`] trait for pluggable config layers and
//! the [`ConfigResolver`] that folds defaults and every layer into one
//! immutable [`AppConfig`]. Submodules provide the data model, profile
//! handling, validation, and the concrete source implementations.

pub mod model;
pub mod profile;
pub mod sources;
pub mod validation;

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TemplateError;
use model::AppConfig;
use profile::Profiles;
use sources::builtin::BuiltinProfileSource;
use sources::env::EnvSource;
use sources::file_source;

// async_trait is required here because ConfigSource is used as Box<dyn ConfigSource>
// and native async fn in traits does not support dyn dispatch.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    fn name(&self) -> &str;

    /// Partial `app` tree contributed by this layer, or `None` when the
    /// layer has nothing to say (missing file, no matching variables).
    async fn load(&self) -> Result<Option<Value>, TemplateError>;
}

/// Final configuration plus the names of the layers that contributed.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: AppConfig,
    pub layers: Vec<String>,
}

/// Ordered stack of layers, lowest precedence first.
#[derive(Default)]
pub struct ConfigResolver {
    layers: Vec<Box<dyn ConfigSource>>,
}

impl ConfigResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard stack: built-in profile overlays, `application` file,
    /// `application-{profile}` files, then `APP_*` variables.
    pub async fn standard(config_dir: &Path, profiles: &Profiles, env: EnvSource) -> Self {
        let mut resolver = Self::new();

        for profile in profiles.selecting() {
            resolver.push(BuiltinProfileSource::new(profile));
        }

        if let Some(source) = file_source::discover(config_dir, "application").await {
            resolver.push(source);
        }

        for profile in profiles.selecting() {
            let stem = format!("application-{profile}");
            if let Some(source) = file_source::discover(config_dir, &stem).await {
                resolver.push(source);
            }
        }

        resolver.push(env);
        resolver
    }

    pub fn push<S: ConfigSource + 'static>(&mut self, source: S) -> &mut Self {
        self.layers.push(Box::new(source));
        self
    }

    #[must_use]
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name()).collect()
    }

    pub async fn resolve(&self) -> Result<ResolvedConfig, TemplateError> {
        let mut tree = serde_json::to_value(AppConfig::default()).map_err(|e| {
            TemplateError::ConfigBind {
                layers: "defaults".into(),
                source: e,
            }
        })?;
        let mut applied = vec!["defaults".to_string()];

        for layer in &self.layers {
            if let Some(overlay) = layer.load().await? {
                tracing::debug!(layer = layer.name(), "config layer applied");
                sources::merge(&mut tree, sources::normalize_keys(overlay));
                applied.push(layer.name().to_string());
            }
        }

        let config: AppConfig =
            serde_json::from_value(tree.clone()).map_err(|e| TemplateError::ConfigBind {
                layers: applied.join(", "),
                source: e,
            })?;

        if let Ok(known) = serde_json::to_value(&config) {
            for key in sources::unknown_keys(&tree, &known) {
                tracing::warn!(key = %format!("app.{key}"), "ignoring unknown configuration key");
            }
        }

        Ok(ResolvedConfig {
            config,
            layers: applied,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    struct Fixed(&'static str, Value);

    #[async_trait]
    impl ConfigSource for Fixed {
        fn name(&self) -> &str {
            self.0
        }

        async fn load(&self) -> Result<Option<Value>, TemplateError> {
            Ok(Some(self.1.clone()))
        }
    }

    #[tokio::test]
    async fn empty_stack_yields_defaults() {
        let resolved = ConfigResolver::new().resolve().await.unwrap();
        assert_eq!(resolved.config, AppConfig::default());
        assert_eq!(resolved.layers, ["defaults"]);
    }

    #[tokio::test]
    async fn later_layers_win() {
        let mut resolver = ConfigResolver::new();
        resolver
            .push(Fixed("low", json!({"name": "low", "cache": {"ttl": 10}})))
            .push(Fixed("high", json!({"name": "high"})));

        let resolved = resolver.resolve().await.unwrap();
        assert_eq!(resolved.config.name, "high");
        assert_eq!(resolved.config.cache.ttl, 10);
        assert_eq!(resolved.layers, ["defaults", "low", "high"]);
    }

    #[tokio::test]
    async fn type_mismatch_is_a_bind_error() {
        let mut resolver = ConfigResolver::new();
        resolver.push(Fixed("bad", json!({"cache": {"ttl": "five minutes"}})));

        let err = resolver.resolve().await.unwrap_err();
        match err {
            TemplateError::ConfigBind { layers, .. } => assert!(layers.contains("bad")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn relaxed_names_bind_and_unknown_keys_are_ignored() {
        let mut resolver = ConfigResolver::new();
        resolver.push(Fixed(
            "file",
            json!({"debugMode": true, "rate_limiting": {"requestsPerMinute": 7}, "owner": "team-a"}),
        ));

        let config = resolver.resolve().await.unwrap().config;
        assert!(config.debug_mode);
        assert_eq!(config.rate_limiting.requests_per_minute, 7);
    }

    #[tokio::test]
    async fn dev_profile_enables_debug_mode() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = Profiles::new(["dev"], ["default"]);
        let resolver = ConfigResolver::standard(dir.path(), &profiles, EnvSource::default()).await;

        let config = resolver.resolve().await.unwrap().config;
        assert!(config.debug_mode);
        assert_eq!(config.environment, "development");
        assert!(!config.cache.enabled);
    }
}
