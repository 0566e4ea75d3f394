//! Overrides packaged with the template for the known profiles.
//!
//! These play the role of the profile files that ship inside the
//! service; on-disk `application-{profile}` files and `APP_*` variables
//! still take precedence over them.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::profile::{DEV, PROD, STAGING};
use crate::config::ConfigSource;
use crate::error::TemplateError;

pub struct BuiltinProfileSource {
    name: String,
    overlay: Option<Value>,
}

impl BuiltinProfileSource {
    #[must_use]
    pub fn new(profile: &str) -> Self {
        Self {
            name: format!("profile:{profile}"),
            overlay: overlay_for(profile),
        }
    }
}

fn overlay_for(profile: &str) -> Option<Value> {
    match profile {
        DEV => Some(json!({
            "environment": "development",
            "debug-mode": true,
        })),
        STAGING => Some(json!({
            "environment": "staging",
            "monitoring": { "metrics-enabled": true },
        })),
        PROD => Some(json!({
            "environment": "production",
            "cache": { "enabled": true },
            "rate-limiting": { "enabled": true },
            "monitoring": { "metrics-enabled": true, "tracing-enabled": true },
        })),
        _ => None,
    }
}

#[async_trait]
impl ConfigSource for BuiltinProfileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<Option<Value>, TemplateError> {
        Ok(self.overlay.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dev_enables_debug_mode() {
        let overlay = BuiltinProfileSource::new("dev").load().await.unwrap().unwrap();
        assert_eq!(overlay["debug-mode"], true);
    }

    #[tokio::test]
    async fn custom_profile_contributes_nothing() {
        let source = BuiltinProfileSource::new("qa");
        assert_eq!(source.name(), "profile:qa");
        assert!(source.load().await.unwrap().is_none());
    }
}
