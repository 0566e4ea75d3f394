//! Concrete [`ConfigSource`](super::ConfigSource) implementations.
//!
//! Provides the built-in profile overlays, file-based sources (YAML,
//! JSON, TOML) gated by feature flags, and the `APP_*` environment
//! binding. Every source yields a partial JSON tree rooted at the `app`
//! namespace; [`normalize_keys`] brings its keys to kebab-case and
//! [`merge`] folds the trees together before binding.

pub mod builtin;
pub mod env;
pub mod file_source;

#[cfg(feature = "yaml")]
pub mod yaml;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "toml")]
pub mod toml_source;

use serde_json::Value;

/// Top-level key every config file nests its values under.
pub const NAMESPACE: &str = "app";

/// Extensions probed, in order, when looking for a config file.
pub const EXTENSIONS: &[&str] = &[
    #[cfg(feature = "yaml")]
    "yaml",
    #[cfg(feature = "yaml")]
    "yml",
    #[cfg(feature = "json")]
    "json",
    #[cfg(feature = "toml")]
    "toml",
];

/// Take the `app` subtree out of a parsed document. Documents without
/// one (or empty YAML documents, which parse as `null`) contribute
/// nothing.
#[must_use]
pub fn take_namespace(document: Value) -> Option<Value> {
    match document {
        Value::Object(mut map) => map.remove(NAMESPACE).filter(|v| !v.is_null()),
        _ => None,
    }
}

/// Deep-merge `overlay` into `base`. Objects merge key by key; any other
/// value (including lists) replaces what was there.
pub fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Relaxed key spelling: `debugMode`, `debug_mode` and `DEBUG-MODE` all
/// become `debug-mode`.
#[must_use]
pub fn normalize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for c in key.chars() {
        if c == '_' || c == '-' {
            if !out.ends_with('-') {
                out.push('-');
            }
            prev_lower = false;
        } else if c.is_ascii_uppercase() {
            if prev_lower {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    out
}

/// Rewrite every object key in `tree` with [`normalize_key`].
#[must_use]
pub fn normalize_keys(tree: Value) -> Value {
    match tree {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (normalize_key(&k), normalize_keys(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

/// Dotted paths present in `tree` but absent from `known` (the bound
/// config serialized back). Only objects are compared.
#[must_use]
pub fn unknown_keys(tree: &Value, known: &Value) -> Vec<String> {
    let mut found = Vec::new();
    collect_unknown(tree, known, "", &mut found);
    found
}

fn collect_unknown(tree: &Value, known: &Value, prefix: &str, found: &mut Vec<String>) {
    let (Value::Object(tree), Value::Object(known)) = (tree, known) else {
        return;
    };
    for (key, value) in tree {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match known.get(key) {
            Some(known_value) => collect_unknown(value, known_value, &path, found),
            None => found.push(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn merge_objects_recursively() {
        let mut base = json!({"cache": {"enabled": false, "ttl": 300}, "name": "a"});
        merge(&mut base, json!({"cache": {"enabled": true}}));
        assert_eq!(
            base,
            json!({"cache": {"enabled": true, "ttl": 300}, "name": "a"})
        );
    }

    #[test]
    fn merge_replaces_lists() {
        let mut base = json!({"cors": {"allowed-methods": ["GET", "POST"]}});
        merge(&mut base, json!({"cors": {"allowed-methods": ["PATCH"]}}));
        assert_eq!(base["cors"]["allowed-methods"], json!(["PATCH"]));
    }

    #[test]
    fn relaxed_keys_become_kebab_case() {
        assert_eq!(normalize_key("debugMode"), "debug-mode");
        assert_eq!(normalize_key("debug_mode"), "debug-mode");
        assert_eq!(normalize_key("requestsPerMinute"), "requests-per-minute");
        assert_eq!(normalize_key("rate-limiting"), "rate-limiting");
        assert_eq!(normalize_key("ttl"), "ttl");
        assert_eq!(
            normalize_keys(json!({"rateLimiting": {"requests_per_minute": 5}, "cors": {"allowedOrigins": ["https://A.example"]}})),
            json!({"rate-limiting": {"requests-per-minute": 5}, "cors": {"allowed-origins": ["https://A.example"]}})
        );
    }

    #[test]
    fn unknown_paths_are_reported() {
        let known = json!({"name": "a", "cache": {"enabled": false, "ttl": 1}, "cors": {"allowed-origins": []}});
        let tree = json!({"owner": "team-a", "cache": {"enabled": true, "size": 3}, "cors": {"allowed-origins": ["x"]}});
        assert_eq!(unknown_keys(&tree, &known), ["cache.size", "owner"]);
    }

    #[test]
    fn namespace_is_extracted() {
        let doc = json!({"app": {"name": "svc"}, "server": {"port": 1}});
        assert_eq!(take_namespace(doc), Some(json!({"name": "svc"})));
        assert_eq!(take_namespace(json!({"server": {}})), None);
        assert_eq!(take_namespace(Value::Null), None);
    }
}
