//! Scoreboard Back binary entrypoint wiring configuration, the document store and the REST API.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use scoreboard_back::{
    config::AppConfig, dao::scoreboard_store::FileScoreboardStore, routes, state::AppState,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let store = FileScoreboardStore::new(config.data_file());
    let app_state = AppState::new(Arc::new(store));

    app_state
        .scoreboard()
        .initialize()
        .await
        .with_context(|| format!("initializing {}", config.data_file().display()))?;

    let app = routes::build_router(app_state, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port()));
    info!(%addr, data_file = %config.data_file().display(), "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = term.recv() => {},
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
