//! Active/default profiles and the per-profile descriptor table.
//!
//! [`Profiles`] carries the profile names supplied at startup. The
//! first active profile is the *primary* one; it drives the
//! [`describe`] lookup and the JWT secret check in
//! [`health::evaluate`](crate::health::evaluate).

pub const DEV: &str = "dev";
pub const STAGING: &str = "staging";
pub const PROD: &str = "prod";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profiles {
    active: Vec<String>,
    default: Vec<String>,
}

impl Default for Profiles {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            default: vec!["default".to_string()],
        }
    }
}

impl Profiles {
    /// Build from raw names. Blank entries are dropped and names are
    /// trimmed; order is preserved.
    #[must_use]
    pub fn new<A, D>(active: A, default: D) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        Self {
            active: clean(active),
            default: clean(default),
        }
    }

    #[must_use]
    pub fn active(&self) -> &[String] {
        &self.active
    }

    #[must_use]
    pub fn default_profiles(&self) -> &[String] {
        &self.default
    }

    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.active.first().map(String::as_str)
    }

    /// Profiles whose overrides apply: the active ones, or the defaults
    /// when nothing is active.
    #[must_use]
    pub fn selecting(&self) -> &[String] {
        if self.active.is_empty() {
            &self.default
        } else {
            &self.active
        }
    }
}

fn clean<I>(names: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .map(|n| n.as_ref().trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileDescriptor {
    pub description: &'static str,
    /// `None` for custom profiles.
    pub features: Option<&'static [&'static str]>,
}

const CUSTOM: ProfileDescriptor = ProfileDescriptor {
    description: "Custom environment configuration",
    features: None,
};

/// Exact-match lookup of the known profiles; anything else is custom.
#[must_use]
pub fn describe(profile: &str) -> ProfileDescriptor {
    match profile {
        DEV => ProfileDescriptor {
            description: "Development environment with debugging enabled",
            features: Some(&["H2 Console", "Debug Logging", "All Actuator Endpoints"]),
        },
        STAGING => ProfileDescriptor {
            description: "Staging environment for testing",
            features: Some(&[
                "PostgreSQL",
                "Moderate Logging",
                "Limited Actuator Endpoints",
            ]),
        },
        PROD => ProfileDescriptor {
            description: "Production environment with optimizations",
            features: Some(&["PostgreSQL", "Minimal Logging", "Security Hardened"]),
        },
        _ => CUSTOM,
    }
}
