//! `backend-template run`: start the HTTP server.
//!
//! Resolves configuration once from defaults, profile overlays, files
//! and `APP_*` variables, logs any validation findings, and starts the
//! Axum server with graceful shutdown. The configuration is not
//! reloaded while the process runs.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::cli::RunArgs;
use crate::config::sources::env::EnvSource;
use crate::config::{validation, ConfigResolver};
use crate::error::TemplateError;
use crate::health;
use crate::logging;
use crate::server::{self, AppState};

pub async fn execute(args: RunArgs) -> Result<(), TemplateError> {
    let profiles = args.source.profiles();
    let resolver =
        ConfigResolver::standard(&args.source.config_dir, &profiles, EnvSource::from_env()).await;
    let resolved = resolver.resolve().await?;

    let level = logging::level_for(args.log_level, resolved.config.debug_mode);
    logging::init(level, logging::resolve_format(args.pretty, args.json));

    tracing::info!(
        layers = %resolved.layers.join(", "),
        active_profiles = ?profiles.active(),
        "configuration resolved"
    );

    if let Err(errors) = validation::validate(&resolved.config) {
        for error in &errors {
            tracing::warn!(
                field = %error.field,
                message = %error.message,
                suggestion = error.suggestion.as_deref().unwrap_or(""),
                "configuration value violates template contract"
            );
        }
    }

    let verdict = health::evaluate(&resolved.config, &profiles);
    if !verdict.is_healthy() {
        tracing::warn!(
            jwt_secret = ?verdict.jwt_secret,
            "configuration health is UNHEALTHY; see GET /config/health"
        );
    }

    let state = Arc::new(AppState::new(resolved, profiles));
    let app_name = state.config.name.clone();
    let router = server::build_router(state, args.max_body);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(addr = %addr, app = %app_name, "backend-template started");

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    tracing::info!("backend-template stopped");
    Ok(())
}
