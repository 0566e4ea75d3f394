//! Integration tests for layered config resolution from files, profiles
//! and environment variables.

use std::path::Path;

use backend_template::config::profile::Profiles;
use backend_template::config::sources::env::EnvSource;
use backend_template::config::ConfigResolver;
use backend_template::error::TemplateError;

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap_or_else(|e| panic!("write {name}: {e}"));
}

async fn resolve(
    dir: &Path,
    profiles: &Profiles,
    env: &[(&str, &str)],
) -> Result<backend_template::config::ResolvedConfig, TemplateError> {
    let env = EnvSource::from_vars(env.iter().copied());
    ConfigResolver::standard(dir, profiles, env)
        .await
        .resolve()
        .await
}

#[tokio::test]
async fn defaults_only() {
    let dir = tempfile::tempdir().unwrap();
    let resolved = resolve(dir.path(), &Profiles::default(), &[]).await.unwrap();
    let config = resolved.config;

    assert_eq!(config.name, "CS301 Backend Template");
    assert_eq!(config.version, "1.0.0");
    assert!(!config.debug_mode);
    assert!(!config.cache.enabled);
    assert_eq!(config.cache.ttl, 300);
    assert!(!config.rate_limiting.enabled);
    assert_eq!(config.rate_limiting.requests_per_minute, 100);
    assert_eq!(resolved.layers, ["defaults"]);
}

#[tokio::test]
async fn dev_profile_loads_like_template_tests() {
    let dir = tempfile::tempdir().unwrap();
    let profiles = Profiles::new(["dev"], ["default"]);
    let config = resolve(dir.path(), &profiles, &[]).await.unwrap().config;

    assert_eq!(config.name, "CS301 Backend Template");
    assert_eq!(config.environment, "development");
    assert!(config.debug_mode);
    assert!(!config.cors.allowed_origins.is_empty());
    for method in ["GET", "POST", "PUT", "DELETE"] {
        assert!(config.cors.allowed_methods.iter().any(|m| m == method));
    }
    assert!(config.cors.allow_credentials);
    assert!(!config.security.jwt.secret.trim().is_empty());
    assert!(config.security.jwt.expiration > 0);
    assert!(!config.cache.enabled);
    assert!(config.cache.ttl > 0);
}

#[tokio::test]
async fn prod_builtin_overlay() {
    let dir = tempfile::tempdir().unwrap();
    let profiles = Profiles::new(["prod"], ["default"]);
    let config = resolve(dir.path(), &profiles, &[]).await.unwrap().config;

    assert_eq!(config.environment, "production");
    assert!(config.cache.enabled);
    assert!(config.rate_limiting.enabled);
    assert!(config.monitoring.metrics_enabled);
    assert!(config.monitoring.tracing_enabled);
    assert!(!config.debug_mode);
}

#[cfg(feature = "yaml")]
#[tokio::test]
async fn layer_precedence() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "application.yaml",
        "app:\n  name: Base Name\n  description: from base\n  cache:\n    ttl: 10\n  debug-mode: false\n",
    );
    write(
        dir.path(),
        "application-dev.yaml",
        "app:\n  name: Dev Name\n  cache:\n    enabled: true\n",
    );
    let profiles = Profiles::new(["dev"], ["default"]);

    let resolved = resolve(dir.path(), &profiles, &[("APP_NAME", "Env Name")])
        .await
        .unwrap();
    let config = resolved.config;

    // env > profile file > base file > built-in overlay > defaults
    assert_eq!(config.name, "Env Name");
    assert_eq!(config.description, "from base");
    assert!(config.cache.enabled);
    assert_eq!(config.cache.ttl, 10);
    assert!(!config.debug_mode, "base file overrides the built-in dev overlay");
    assert_eq!(config.environment, "development");
    assert_eq!(resolved.layers.len(), 5);
    assert_eq!(resolved.layers[1], "profile:dev");
    assert_eq!(resolved.layers[4], "env");
}

#[cfg(feature = "yaml")]
#[tokio::test]
async fn default_profile_file_applies_when_nothing_active() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "application-default.yml",
        "app:\n  environment: local\n",
    );

    let config = resolve(dir.path(), &Profiles::default(), &[])
        .await
        .unwrap()
        .config;
    assert_eq!(config.environment, "local");
}

#[cfg(feature = "yaml")]
#[tokio::test]
async fn unknown_keys_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "application.yaml",
        "app:\n  owner: team-a\n  cahce:\n    enabled: true\n",
    );

    let resolved = resolve(dir.path(), &Profiles::default(), &[])
        .await
        .unwrap();
    assert!(!resolved.config.cache.enabled);
    assert_eq!(resolved.layers.len(), 2);
}

#[cfg(feature = "yaml")]
#[tokio::test]
async fn camel_case_keys_bind_like_kebab_case() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "application.yaml",
        "app:\n  debugMode: true\n  rateLimiting:\n    requestsPerMinute: 42\n",
    );

    let config = resolve(dir.path(), &Profiles::default(), &[])
        .await
        .unwrap()
        .config;
    assert!(config.debug_mode);
    assert_eq!(config.rate_limiting.requests_per_minute, 42);
}

#[cfg(feature = "yaml")]
#[tokio::test]
async fn file_without_app_namespace_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "application.yaml", "server:\n  port: 9090\n");

    let resolved = resolve(dir.path(), &Profiles::default(), &[])
        .await
        .unwrap();
    assert_eq!(resolved.layers, ["defaults"]);
}

#[cfg(feature = "json")]
#[tokio::test]
async fn json_file_is_discovered() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "application.json",
        r#"{"app": {"rate-limiting": {"requests-per-minute": 42}}}"#,
    );

    let config = resolve(dir.path(), &Profiles::default(), &[])
        .await
        .unwrap()
        .config;
    assert_eq!(config.rate_limiting.requests_per_minute, 42);
}

#[cfg(feature = "toml")]
#[tokio::test]
async fn toml_file_is_discovered() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "application-prod.toml",
        "[app.security.jwt]\nsecret = \"rotated\"\n",
    );

    let profiles = Profiles::new(["prod"], ["default"]);
    let config = resolve(dir.path(), &profiles, &[]).await.unwrap().config;
    assert_eq!(config.security.jwt.secret, "rotated");
}

#[tokio::test]
async fn env_lists_and_flags() {
    let dir = tempfile::tempdir().unwrap();
    let config = resolve(
        dir.path(),
        &Profiles::default(),
        &[
            ("APP_CORS_ALLOWED_ORIGINS", "https://a.example,https://*.b.example"),
            ("APP_CORS_ALLOW_CREDENTIALS", "false"),
            ("APP_RATE_LIMITING_ENABLED", "true"),
            ("APP_MONITORING_TRACING_ENABLED", "true"),
        ],
    )
    .await
    .unwrap()
    .config;

    assert_eq!(
        config.cors.allowed_origins,
        ["https://a.example", "https://*.b.example"]
    );
    assert!(!config.cors.allow_credentials);
    assert!(config.rate_limiting.enabled);
    assert!(config.monitoring.tracing_enabled);
}

#[tokio::test]
async fn malformed_env_value_names_variable() {
    let dir = tempfile::tempdir().unwrap();
    let err = resolve(dir.path(), &Profiles::default(), &[("APP_CACHE_TTL", "abc")])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("APP_CACHE_TTL"), "{err}");
}
