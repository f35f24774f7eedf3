/*
 * Responsibility
 * - Config読み込み → Router 組み立て
 * - Middleware の適用
 * - bind → axum::serve() で起動、シグナルで graceful shutdown
 */
use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, error::AppError, middleware};

fn init_tracing() {
    // RUST_LOG wins when set, e.g. RUST_LOG=info,service_two=debug
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run() -> Result<(), AppError> {
    init_tracing();
    let config = Config::from_env().inspect_err(|err| {
        tracing::error!(error = %err, "invalid configuration");
    })?;

    tracing::info!("service starting on port {}", config.port());

    // Handlers are registered before bind so a signal sent once `listening`
    // is logged always takes the graceful path.
    let shutdown = shutdown_signal();
    let listener = bind(config.addr).await?;
    serve(listener, build_router(), shutdown).await
}

pub fn build_router() -> Router {
    middleware::http::apply(api::routes())
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind(addr).await.map_err(|err| {
        tracing::error!(%addr, error = %err, "failed to bind listener");
        AppError::bind(addr, err)
    })?;

    if let Ok(local) = listener.local_addr() {
        tracing::info!(addr = %local, "listening");
    }
    Ok(listener)
}

/// Serves until `shutdown` resolves, then drains in-flight connections.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(AppError::Serve)?;

    tracing::info!("server stopped");
    Ok(())
}

fn shutdown_signal() -> impl Future<Output = ()> + Send + 'static {
    #[cfg(unix)]
    let sigterm = {
        use tokio::signal::unix::{SignalKind, signal};

        signal(SignalKind::terminate())
            .inspect_err(|err| tracing::error!(error = %err, "failed to install SIGTERM handler"))
            .ok()
    };

    async move {
        let ctrl_c = async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %err, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async move {
            match sigterm {
                Some(mut sigterm) => {
                    sigterm.recv().await;
                }
                None => std::future::pending::<()>().await,
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
            () = terminate => tracing::info!("received SIGTERM, shutting down"),
        }
    }
}
