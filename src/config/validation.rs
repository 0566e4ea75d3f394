//! Configuration validation with detailed error reporting.
//!
//! The [`validate`] function checks a resolved [`AppConfig`] for values
//! that bind fine but break the template's contract: blank identity
//! fields, non-positive durations and limits, malformed CORS origin
//! patterns and unknown HTTP methods. Findings are reported by
//! `validate` and logged at startup; they never stop the server.

use url::Url;

use super::model::AppConfig;
use crate::error::ValidationError;

pub const VALID_METHODS: &[&str] = &[
    "GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS", "TRACE", "*",
];

/// Validate a CORS origin pattern. `*` alone is accepted; otherwise the
/// pattern (with wildcards substituted) must look like
/// `scheme://host[:port]`.
pub fn validate_origin_pattern(pattern: &str) -> Result<(), String> {
    if pattern == "*" {
        return Ok(());
    }
    let probe = pattern.replace(":*", ":1").replace('*', "wildcard");
    match Url::parse(&probe) {
        Ok(parsed) if parsed.host_str().is_some() => {
            if parsed.path() != "/" || pattern.ends_with('/') {
                Err(format!("'{pattern}' must not contain a path"))
            } else {
                Ok(())
            }
        }
        _ => Err(format!("'{pattern}' is not a valid origin pattern")),
    }
}

/// Validate an HTTP method string. Returns `Ok(())` or a human-readable error.
pub fn validate_method(method: &str) -> Result<(), String> {
    let upper = method.to_uppercase();
    if VALID_METHODS.contains(&upper.as_str()) {
        Ok(())
    } else {
        Err(format!("'{method}' is not a valid HTTP method"))
    }
}

pub fn validate(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.name.trim().is_empty() {
        errors.push(
            ValidationError::new("name", "must not be blank").with_suggestion("set APP_NAME"),
        );
    }
    if config.version.trim().is_empty() {
        errors.push(
            ValidationError::new("version", "must not be blank")
                .with_suggestion("set APP_VERSION"),
        );
    }

    let jwt = &config.security.jwt;
    if jwt.secret.trim().is_empty() {
        errors.push(
            ValidationError::new("security.jwt.secret", "must not be blank")
                .with_suggestion("set APP_SECURITY_JWT_SECRET"),
        );
    }
    if jwt.expiration <= 0 {
        errors.push(ValidationError::new(
            "security.jwt.expiration",
            format!("must be positive, got {}", jwt.expiration),
        ));
    }

    if config.cache.ttl <= 0 {
        errors.push(ValidationError::new(
            "cache.ttl",
            format!("must be positive, got {}", config.cache.ttl),
        ));
    }

    if config.rate_limiting.requests_per_minute <= 0 {
        errors.push(ValidationError::new(
            "rate-limiting.requests-per-minute",
            format!(
                "must be positive, got {}",
                config.rate_limiting.requests_per_minute
            ),
        ));
    }

    for origin in &config.cors.allowed_origins {
        if let Err(msg) = validate_origin_pattern(origin) {
            let mut error = ValidationError::new("cors.allowed-origins", msg);
            if let Some(trimmed) = origin.strip_suffix('/') {
                error = error.with_suggestion(format!("did you mean '{trimmed}'?"));
            }
            errors.push(error);
        }
    }

    for method in &config.cors.allowed_methods {
        if let Err(msg) = validate_method(method) {
            errors.push(ValidationError::new("cors.allowed-methods", msg));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// One-line summary for a configuration that passed validation.
#[must_use]
pub fn format_validation_report(config: &AppConfig, layers: &[String]) -> String {
    format!(
        "{} {} is valid ({} layers: {})",
        config.name,
        config.version,
        layers.len(),
        layers.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        validate(&AppConfig::default()).unwrap();
    }

    #[test]
    fn blank_name_fails() {
        let mut config = AppConfig::default();
        config.name = "   ".into();
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn non_positive_durations_fail() {
        let mut config = AppConfig::default();
        config.cache.ttl = 0;
        config.security.jwt.expiration = -5;
        config.rate_limiting.requests_per_minute = 0;
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .any(|e| e.field == "rate-limiting.requests-per-minute"));
        assert!(errors.iter().any(|e| e.field == "cache.ttl"));
        assert!(errors.iter().any(|e| e.field == "security.jwt.expiration"));
    }

    #[test]
    fn origin_patterns() {
        assert!(validate_origin_pattern("*").is_ok());
        assert!(validate_origin_pattern("http://localhost:3000").is_ok());
        assert!(validate_origin_pattern("https://*.example.com").is_ok());
        assert!(validate_origin_pattern("http://localhost:*").is_ok());
        assert!(validate_origin_pattern("localhost:3000").is_err());
        assert!(validate_origin_pattern("https://example.com/app").is_err());
    }

    #[test]
    fn trailing_slash_origin_gets_suggestion() {
        let mut config = AppConfig::default();
        config.cors.allowed_origins = vec!["https://example.com/".into()];
        let errors = validate(&config).unwrap_err();
        assert_eq!(
            errors[0].suggestion.as_deref(),
            Some("did you mean 'https://example.com'?")
        );
    }

    #[test]
    fn invalid_method_fails() {
        let mut config = AppConfig::default();
        config.cors.allowed_methods.push("FETCH".into());
        let errors = validate(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.message.contains("not a valid HTTP method")));
    }
}
