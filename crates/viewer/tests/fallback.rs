//! End-to-end tests: the viewer against a real problems service on an
//! ephemeral port, covering the primary, fallback, and double-failure paths.

use std::net::SocketAddr;
use std::sync::Arc;

use assert_matches::assert_matches;
use async_trait::async_trait;

use goldenpath_api::config::ServerConfig;
use goldenpath_api::router::build_app_router;
use goldenpath_api::state::AppState;
use goldenpath_core::dataset::{bundled_problems, BundledSource, ProblemSource, StaticSource};
use goldenpath_core::error::CoreError;
use goldenpath_core::problem::{ProblemRecord, ProblemStatus};
use goldenpath_viewer::client::ProblemsClient;
use goldenpath_viewer::error::ViewerError;
use goldenpath_viewer::render::{PageRenderer, FALLBACK_NOTICE};
use goldenpath_viewer::source::{Tier, TieredSource};
use goldenpath_viewer::viewer::{ProblemsViewer, ViewState};

struct Broken;

#[async_trait]
impl ProblemSource for Broken {
    fn name(&self) -> &str {
        "broken"
    }

    async fn load(&self) -> Result<Vec<ProblemRecord>, CoreError> {
        Err(CoreError::InvalidDataset("unreadable".into()))
    }
}

fn server_config() -> ServerConfig {
    ServerConfig::from_lookup(|key| match key {
        "HOST" => Some("127.0.0.1".to_string()),
        "PORT" => Some("0".to_string()),
        _ => None,
    })
}

/// Serve the real router over `source` and return its address.
async fn spawn_service(source: impl ProblemSource + 'static) -> SocketAddr {
    let app = build_app_router(AppState::new(server_config(), Arc::new(source)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address nothing is listening on.
async fn dead_address() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

fn render_page(state: &ViewState) -> String {
    PageRenderer::new().unwrap().render_page(state).unwrap()
}

fn client_for(addr: SocketAddr) -> ProblemsClient {
    ProblemsClient::new(format!("http://{addr}/problems"))
}

fn five_records() -> Vec<ProblemRecord> {
    [
        ProblemStatus::Resolved,
        ProblemStatus::Resolved,
        ProblemStatus::Ongoing,
        ProblemStatus::Resolved,
        ProblemStatus::Ongoing,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, status)| ProblemRecord {
        id: 100 + i as i64,
        title: format!("Remote problem {i}"),
        category: "Remote".into(),
        description: "d".into(),
        solution: "s".into(),
        status,
        date: "2024-09-09".into(),
    })
    .collect()
}

#[tokio::test]
async fn client_decodes_envelope() {
    let addr = spawn_service(StaticSource::new(five_records())).await;
    let envelope = client_for(addr).fetch_problems().await.unwrap();

    assert_eq!(envelope.count, 5);
    assert_eq!(envelope.data, five_records());
}

#[tokio::test]
async fn client_reports_non_success_status() {
    let addr = spawn_service(Broken).await;
    assert_matches!(
        client_for(addr).fetch_problems().await,
        Err(ViewerError::Status { status: 500 })
    );
}

#[tokio::test]
async fn viewer_uses_service_when_available() {
    let addr = spawn_service(StaticSource::new(five_records())).await;
    let mut viewer = ProblemsViewer::new(TieredSource::new(
        Arc::new(client_for(addr)),
        Arc::new(BundledSource),
    ));

    let state = viewer.load().await;
    assert_matches!(state, ViewState::Loaded { tier: Tier::Primary, error: None, .. });
    assert_eq!(state.problems(), five_records().as_slice());

    let html = render_page(state);
    assert_eq!(html.matches(r#"class="problem-card resolved""#).count(), 3);
    assert!(!html.contains(FALLBACK_NOTICE));
}

#[tokio::test]
async fn viewer_falls_back_when_service_errors() {
    let addr = spawn_service(Broken).await;
    let mut viewer = ProblemsViewer::new(TieredSource::new(
        Arc::new(client_for(addr)),
        Arc::new(BundledSource),
    ));

    let state = viewer.load().await;
    assert!(state.using_fallback());
    assert_eq!(state.problems(), bundled_problems().unwrap().as_slice());
    assert_eq!(state.error(), Some("HTTP error! status: 500"));
    assert!(render_page(state).contains(FALLBACK_NOTICE));
}

#[tokio::test]
async fn viewer_falls_back_when_service_unreachable() {
    let addr = dead_address().await;
    let mut viewer = ProblemsViewer::new(TieredSource::new(
        Arc::new(client_for(addr)),
        Arc::new(BundledSource),
    ));

    let state = viewer.load().await;
    assert!(!state.is_loading());
    assert!(state.using_fallback());
    assert_eq!(state.problems(), bundled_problems().unwrap().as_slice());
}

#[tokio::test]
async fn viewer_fails_when_both_tiers_fail() {
    let addr = dead_address().await;
    let mut viewer = ProblemsViewer::new(TieredSource::new(
        Arc::new(client_for(addr)),
        Arc::new(Broken),
    ));

    let state = viewer.load().await;
    assert_matches!(state, ViewState::Failed { .. });
    assert!(render_page(state).contains("Failed to load problems"));
}

#[tokio::test]
async fn every_load_refetches() {
    let addr = spawn_service(StaticSource::new(five_records())).await;
    let mut viewer = ProblemsViewer::new(TieredSource::new(
        Arc::new(client_for(addr)),
        Arc::new(BundledSource),
    ));

    let first = viewer.load().await.clone();
    let second = viewer.load().await.clone();
    assert_eq!(first, second);
    assert_eq!(second.problems().len(), 5);
}
