//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (run, validate, health), and their associated argument
//! structs. Every flag has an environment variable equivalent for
//! container deployments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::profile::Profiles;

#[derive(Parser)]
#[command(
    name = "backend-template",
    version,
    about = "Backend service template with environment-driven configuration",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        backend-template run                         Start with defaults\n  \
        backend-template run -P dev                  Start with the dev profile\n  \
        backend-template validate -P prod            Check the prod configuration"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Run(Box<RunArgs>),

    /// Resolve and check the configuration without starting
    Validate(ValidateArgs),

    /// Check the configuration health of a running instance
    Health(HealthArgs),
}

/// Where configuration comes from; shared by `run` and `validate`.
#[derive(Args, Clone, Debug)]
pub struct SourceArgs {
    /// Directory searched for application[-{profile}].{yaml,yml,json,toml}
    #[arg(short, long, env = "CONFIG_DIR", default_value = ".")]
    pub config_dir: PathBuf,

    /// Active profiles, comma separated (first one is primary)
    #[arg(
        short = 'P',
        long,
        env = "APP_PROFILES_ACTIVE",
        value_delimiter = ','
    )]
    pub profiles: Vec<String>,

    /// Profiles used when no profile is active
    #[arg(
        long,
        env = "APP_PROFILES_DEFAULT",
        value_delimiter = ',',
        default_value = "default"
    )]
    pub default_profiles: Vec<String>,
}

impl SourceArgs {
    #[must_use]
    pub fn profiles(&self) -> Profiles {
        Profiles::new(&self.profiles, &self.default_profiles)
    }
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        backend-template run                               Defaults, port 8080\n  \
        backend-template run -c config -P staging          Profile files from ./config\n  \
        backend-template run -p 9000 --pretty              Local dev mode")]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Listen port
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Listen address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    // -- Logging --
    /// Log level (defaults to debug when debug-mode is on, info otherwise)
    #[arg(short, long, env = "LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,

    // -- Tuning --
    /// Max request body size in bytes
    #[arg(
        long,
        env = "MAX_BODY_SIZE",
        default_value_t = 1_048_576,
        help_heading = "Tuning"
    )]
    pub max_body: usize,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: ValidateFormat,
}

#[derive(Args)]
pub struct HealthArgs {
    /// URL of the running instance
    #[arg(default_value = "http://localhost:8080")]
    pub url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ValidateFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_split_on_commas() {
        let cli = Cli::try_parse_from(["backend-template", "validate", "-P", "staging,metrics"])
            .unwrap();
        let Some(Commands::Validate(args)) = cli.command else {
            panic!("expected validate");
        };
        let profiles = args.source.profiles();
        assert_eq!(profiles.primary(), Some("staging"));
        assert_eq!(profiles.active(), ["staging", "metrics"]);
        assert_eq!(profiles.default_profiles(), ["default"]);
    }

    #[test]
    fn run_defaults() {
        let cli = Cli::try_parse_from(["backend-template", "run"]).unwrap();
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.port, 8080);
        assert!(args.log_level.is_none());
        assert_eq!(args.source.config_dir, PathBuf::from("."));
    }
}
