//! HTTP server lifecycle: open backends, serve, shut down cleanly.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::api::dto::pagination::ListDefaults;
use crate::config::Config;
use crate::domain::clients::{ArticleClient, AuthClient, AuthorClient};
use crate::infrastructure::grpc::GrpcBackends;
use crate::routes;
use crate::state::AppState;

/// Runs the gateway until SIGINT/SIGTERM.
///
/// Backend connections are opened before the listener binds: if any backend
/// is unreachable the process exits without ever accepting a request. On
/// shutdown, in-flight requests drain before the pool is released.
pub async fn run(config: Config) -> Result<()> {
    let backends = GrpcBackends::open(&config)
        .await
        .context("failed to open backend connections")?;

    let articles: Arc<dyn ArticleClient> = Arc::new(backends.articles.clone());
    let authors: Arc<dyn AuthorClient> = Arc::new(backends.authors.clone());
    let auth: Arc<dyn AuthClient> = Arc::new(backends.auth.clone());

    let state = AppState {
        articles,
        authors,
        auth,
        list_defaults: ListDefaults {
            offset: config.default_offset,
            limit: config.default_limit,
        },
    };

    let app = routes::app_router(state);

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!(addr = %config.listen_addr, "gateway listening");

    axum::serve(listener, routes::into_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    backends.close();
    tracing::info!("gateway stopped");

    Ok(())
}

/// Resolves when the process receives a termination signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
