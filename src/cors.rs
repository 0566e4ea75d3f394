//! CORS policy built from [`CorsSettings`].
//!
//! [`CorsPolicy::from_settings`] copies the configured origin patterns,
//! methods, headers and credentials flag for the single `/**` scope;
//! [`CorsPolicy::into_layer`] hands them to `tower-http`, which does the
//! actual preflight and response-header work.
//!
//! A lone `*` in methods or headers mirrors the request instead of
//! sending a literal wildcard, which browsers reject together with
//! credentials.

use http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::model::CorsSettings;

/// Path scope the policy is registered for.
pub const ALL_PATHS: &str = "/**";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    pub path_pattern: &'static str,
    pub allowed_origin_patterns: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
}

impl CorsPolicy {
    #[must_use]
    pub fn from_settings(settings: &CorsSettings) -> Self {
        Self {
            path_pattern: ALL_PATHS,
            allowed_origin_patterns: settings.allowed_origins.clone(),
            allowed_methods: settings.allowed_methods.clone(),
            allowed_headers: settings.allowed_headers.clone(),
            allow_credentials: settings.allow_credentials,
        }
    }

    #[must_use]
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.allowed_origin_patterns
            .iter()
            .any(|pattern| origin_matches(pattern, origin))
    }

    #[must_use]
    pub fn into_layer(self) -> CorsLayer {
        let methods = if is_wildcard(&self.allowed_methods) {
            AllowMethods::mirror_request()
        } else {
            AllowMethods::list(parse_all::<Method>(&self.allowed_methods, "method"))
        };

        let headers = if is_wildcard(&self.allowed_headers) {
            AllowHeaders::mirror_request()
        } else {
            AllowHeaders::list(parse_all::<HeaderName>(&self.allowed_headers, "header"))
        };

        let allow_credentials = self.allow_credentials;
        let origin = AllowOrigin::predicate(move |origin: &HeaderValue, _parts| {
            origin.to_str().is_ok_and(|o| self.allows_origin(o))
        });

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(allow_credentials)
    }
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}

fn parse_all<T: std::str::FromStr>(values: &[String], kind: &str) -> Vec<T> {
    values
        .iter()
        .filter_map(|v| match v.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                tracing::warn!(value = %v, kind, "skipping unparseable CORS entry");
                None
            }
        })
        .collect()
}

/// Match an origin against a pattern where `*` stands for any run of
/// characters. Comparison ignores ASCII case.
#[must_use]
pub fn origin_matches(pattern: &str, origin: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    let pattern = pattern.to_ascii_lowercase();
    let origin = origin.to_ascii_lowercase();

    let mut parts = pattern.split('*');
    let Some(first) = parts.next() else {
        return false;
    };
    let Some(mut rest) = origin.strip_prefix(first) else {
        return false;
    };

    let tail: Vec<&str> = parts.collect();
    let Some((last, middle)) = tail.split_last() else {
        // no wildcard at all
        return rest.is_empty();
    };

    for segment in middle {
        match rest.find(segment) {
            Some(idx) => rest = &rest[idx + segment.len()..],
            None => return false,
        }
    }
    rest.len() >= last.len() && rest.ends_with(last)
}
