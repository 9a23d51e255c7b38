use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use goldenpath_api::config::ServerConfig;
use goldenpath_api::router::build_app_router;
use goldenpath_api::state::AppState;
use goldenpath_core::dataset::{BundledSource, JsonFileSource, ProblemSource};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goldenpath_api=debug,goldenpath_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        environment = %config.environment,
        "Loaded server configuration",
    );

    // --- Dataset ---
    let problems: Arc<dyn ProblemSource> = match &config.data_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Serving problems from file");
            Arc::new(JsonFileSource::new(path.clone()))
        }
        None => {
            tracing::info!("Serving bundled problems dataset");
            Arc::new(BundledSource)
        }
    };

    // Surface a broken dataset at startup; requests still report it as a 500.
    match problems.load().await {
        Ok(records) => tracing::info!(count = records.len(), "Dataset check passed"),
        Err(e) => tracing::warn!(error = %e, "Dataset check failed"),
    }

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );

    // --- Router ---
    let app = build_app_router(AppState::new(config, problems));

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or SIGTERM (Unix) to initiate graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
