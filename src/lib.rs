//! Backend service template with environment-driven configuration.
//!
//! Configuration is resolved once at startup from built-in defaults,
//! per-profile overlays, optional `application[-{profile}]` files and
//! `APP_*` environment variables. The result is served, partly
//! redacted, over three read-only endpoints and drives the CORS policy.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (run, validate, health).
//! - [`config`] -- Config model, profiles, layered sources and the
//!   [`ConfigResolver`](config::ConfigResolver).
//! - [`health`] -- Pure configuration health verdict.
//! - [`cors`] -- CORS policy built from configuration, applied via `tower-http`.
//! - [`api`] -- `/config/info`, `/config/profile`, `/config/health` and the
//!   `/health` liveness probe.
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//! - [`server`] -- Axum router, shared read-only state, and graceful shutdown.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `yaml` | YAML config file support _(enabled by default)_ |
//! | `json` | JSON config file support |
//! | `toml` | TOML config file support |
//! | `file-backends` | All file format backends |
//! | `full` | All features |

// Binary crate: public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod api;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod cors;
pub mod error;
pub mod health;
pub mod logging;
pub mod server;
