//! Shared helpers for integration tests: spin the router on an
//! ephemeral port and shut it down through a oneshot channel.

use std::net::SocketAddr;
use std::sync::Arc;

use backend_template::config::model::AppConfig;
use backend_template::config::profile::Profiles;
use backend_template::config::ResolvedConfig;
use backend_template::server::{self, AppState};

#[allow(dead_code)]
pub fn profiles(active: &[&str]) -> Profiles {
    Profiles::new(active.iter().copied(), ["default"])
}

pub async fn start_test_server(
    config: AppConfig,
    profiles: Profiles,
) -> (SocketAddr, tokio::sync::oneshot::Sender<()>) {
    let resolved = ResolvedConfig {
        config,
        layers: vec!["defaults".into(), "test".into()],
    };
    let state = Arc::new(AppState::new(resolved, profiles));
    let router = server::build_router(state, 1_048_576);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    (addr, shutdown_tx)
}
