// HTTP request handlers
use crate::presentation::app_state::AppState;
use crate::presentation::page::{new_page, render_document};
use axum::{extract::State, response::Html, routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

/// `/` renders the dashboard; everything else falls through to the static
/// files in `public_dir`, which is where `data/trends.json` lives.
pub fn router(state: Arc<AppState>, public_dir: &Path) -> Router {
    Router::new()
        .route("/", get(render_dashboard))
        .route("/healthz", get(health_check))
        .fallback_service(ServeDir::new(public_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Run one render cycle into a fresh page.
pub async fn render_dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut page = new_page();
    let outcome = state.controller.load(&mut page).await;
    tracing::info!(?outcome, "Rendered dashboard page");

    Html(render_document(&page, state.controller.formatter().locale()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_controller::DashboardController;
    use crate::application::formatter::Formatter;
    use crate::application::trends_source::{FetchError, TrendsSource};
    use crate::domain::locale::Locale;
    use crate::domain::trends::DashboardDocument;
    use crate::infrastructure::http_trends_source::HttpTrendsSource;
    use async_trait::async_trait;
    use chrono::FixedOffset;
    use reqwest::StatusCode;
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use std::time::Duration;

    struct FailingSource;

    #[async_trait]
    impl TrendsSource for FailingSource {
        async fn fetch_document(&self) -> Result<DashboardDocument, FetchError> {
            Err(FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }

    fn public_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
    }

    fn formatter() -> Formatter {
        Formatter::new(Locale::Ja, FixedOffset::east_opt(9 * 3600).unwrap())
    }

    async fn serve(listener: tokio::net::TcpListener, source: Arc<dyn TrendsSource>) {
        let state = Arc::new(AppState {
            controller: DashboardController::new(source, formatter()),
        });
        let app = router(state, &public_dir());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
    }

    async fn bind() -> (tokio::net::TcpListener, SocketAddr) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        (listener, addr)
    }

    #[tokio::test]
    async fn test_health_check() {
        let (listener, addr) = bind().await;
        serve(listener, Arc::new(FailingSource)).await;

        let body = reqwest::get(format!("http://{}/healthz", addr))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_dashboard_renders_from_same_origin_data() {
        let (listener, addr) = bind().await;
        let source =
            HttpTrendsSource::new(format!("http://{}", addr), Duration::from_secs(5)).unwrap();
        serve(listener, Arc::new(source)).await;

        let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
        assert!(response.status().is_success());
        let html = response.text().await.unwrap();

        assert!(html.contains("<div id=\"zenn-list\" class=\"trend-list\"><a class=\"trend-card\""));
        assert!(html.contains("<div id=\"qiita-list\" class=\"trend-list\"><a class=\"trend-card\""));
        assert!(html.contains("<div id=\"github-list\" class=\"trend-list\"><a class=\"trend-card\""));
        assert!(html.contains("最終更新"));
        assert!(!html.contains(Locale::Ja.load_failed()));
    }

    #[tokio::test]
    async fn test_dashboard_error_state() {
        let (listener, addr) = bind().await;
        serve(listener, Arc::new(FailingSource)).await;

        let html = reqwest::get(format!("http://{}/", addr))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert_eq!(html.matches(Locale::Ja.load_failed()).count(), 3);
        assert!(!html.contains("trend-card"));
    }

    #[tokio::test]
    async fn test_unreachable_data_origin_matches_server_error_state() {
        let (closed, closed_addr) = bind().await;
        drop(closed);
        let source =
            HttpTrendsSource::new(format!("http://{}", closed_addr), Duration::from_secs(5)).unwrap();

        let (offline, offline_addr) = bind().await;
        serve(offline, Arc::new(source)).await;
        let (failing, failing_addr) = bind().await;
        serve(failing, Arc::new(FailingSource)).await;

        let offline_html = reqwest::get(format!("http://{}/", offline_addr))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        let failing_html = reqwest::get(format!("http://{}/", failing_addr))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert_eq!(offline_html.matches(Locale::Ja.load_failed()).count(), 3);
        assert!(!offline_html.contains("trend-card"));
        // Same formatter on both servers, so the footer year matches too
        assert_eq!(offline_html, failing_html);
    }

    #[tokio::test]
    async fn test_serves_data_file() {
        let (listener, addr) = bind().await;
        serve(listener, Arc::new(FailingSource)).await;

        let response = reqwest::get(format!("http://{}/data/trends.json?t=1", addr))
            .await
            .unwrap();
        assert!(response.status().is_success());
        let document: serde_json::Value = response.json().await.unwrap();
        assert!(document["trends"]["github"].is_array());
    }
}
