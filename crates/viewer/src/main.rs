//! `goldenpath-viewer` -- renders the problems page once.
//!
//! Fetches `GET /problems` from the configured service, falls back to the
//! bundled dataset on failure, and writes the page HTML.
//!
//! # Environment variables
//!
//! | Variable           | Default       | Description                                  |
//! |--------------------|---------------|----------------------------------------------|
//! | `VIEWER_ENV`       | `development` | `production` selects the production API URL  |
//! | `PROBLEMS_API_URL` | --            | Overrides the service base URL               |
//! | `VIEWER_OUTPUT`    | stdout        | File to write the rendered page to           |

use std::io::Write;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use goldenpath_core::dataset::BundledSource;
use goldenpath_viewer::client::ProblemsClient;
use goldenpath_viewer::config::ViewerConfig;
use goldenpath_viewer::render::PageRenderer;
use goldenpath_viewer::source::TieredSource;
use goldenpath_viewer::viewer::ProblemsViewer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the page.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goldenpath_viewer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ViewerConfig::from_env();
    tracing::info!(url = %config.problems_url(), "Starting goldenpath-viewer");

    let source = TieredSource::new(
        Arc::new(ProblemsClient::new(config.problems_url())),
        Arc::new(BundledSource),
    );
    let renderer = match PageRenderer::new() {
        Ok(renderer) => renderer,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load page templates");
            std::process::exit(1);
        }
    };

    let mut viewer = ProblemsViewer::new(source);
    let html = match renderer.render_page(viewer.load().await) {
        Ok(html) => html,
        Err(e) => {
            tracing::error!(error = %e, "Failed to render page");
            std::process::exit(1);
        }
    };

    let written = match &config.output {
        Some(path) => tokio::fs::write(path, html.as_bytes()).await.map(|()| {
            tracing::info!(path = %path.display(), "Page written");
        }),
        None => std::io::stdout().lock().write_all(html.as_bytes()),
    };

    if let Err(e) = written {
        tracing::error!(error = %e, "Failed to write page");
        std::process::exit(1);
    }
}
