//! Moodscribe Web Server
//!
//! Axum-based web server for the journal form, JSON analysis API, and
//! health probe.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use moodscribe_core::journal::AnalysisService;
use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new().route("/analyze", post(routes::api::analyze));

    Router::new()
        .route("/", get(routes::journal::index))
        .route("/", post(routes::journal::submit))
        .nest("/api", api_routes)
        .route("/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(
    analysis: Arc<dyn AnalysisService>,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    let state = AppState::new(analysis);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use moodscribe_core::error::{MoodscribeError, MoodscribeResult};
    use moodscribe_core::journal::model::{FAILURE_RECOMMENDATION, FAILURE_SUMMARY, NO_ENTRY_SUMMARY};
    use moodscribe_core::journal::Analysis;

    enum StubReply {
        Full,
        Empty,
        Failure,
    }

    struct StubAnalysis {
        reply: StubReply,
        healthy: bool,
    }

    #[async_trait]
    impl AnalysisService for StubAnalysis {
        async fn analyze(&self, _entry: &str) -> MoodscribeResult<Analysis> {
            match self.reply {
                StubReply::Full => Ok(Analysis {
                    summary: Some("S".to_string()),
                    recommendation: Some("R".to_string()),
                }),
                StubReply::Empty => Ok(Analysis::default()),
                StubReply::Failure => Err(MoodscribeError::ServiceStatus(502)),
            }
        }

        async fn health_check(&self) -> bool {
            self.healthy
        }
    }

    fn app(reply: StubReply) -> Router {
        let stub = StubAnalysis {
            reply,
            healthy: true,
        };
        create_router(AppState::new(Arc::new(stub)))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn index_renders_the_form() {
        let response = app(StubReply::Full)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("How was your day?"));
        assert!(!html.contains("Summary:"));
    }

    #[tokio::test]
    async fn form_submission_renders_the_analysis() {
        let response = app(StubReply::Full)
            .oneshot(form_request("entry=my+day"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<strong>Summary:</strong> S"));
        assert!(html.contains("<strong>Recommendation:</strong> R"));
        assert!(html.contains(">my day</textarea>"));
    }

    #[tokio::test]
    async fn form_submission_without_entry_renders_no_entry_message() {
        let response = app(StubReply::Full)
            .oneshot(form_request(""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(NO_ENTRY_SUMMARY));
    }

    #[tokio::test]
    async fn form_submission_on_failure_renders_the_fallback() {
        let response = app(StubReply::Failure)
            .oneshot(form_request("entry=my+day"))
            .await
            .unwrap();

        let html = body_string(response).await;
        assert!(html.contains(FAILURE_SUMMARY));
        assert!(html.contains(FAILURE_RECOMMENDATION));
    }

    #[tokio::test]
    async fn api_analyze_returns_the_result_record() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"entry":"my day"}"#))
            .unwrap();

        let response = app(StubReply::Full).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["summary"], "S");
        assert_eq!(json["recommendation"], "R");
        assert_eq!(json["original"], "my day");
    }

    #[tokio::test]
    async fn api_analyze_omits_absent_recommendation() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"entry":"my day"}"#))
            .unwrap();

        let response = app(StubReply::Empty).oneshot(request).await.unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();

        assert_eq!(json["summary"], serde_json::Value::Null);
        assert!(json.get("recommendation").is_none());
        assert_eq!(json["original"], "my day");
    }

    #[tokio::test]
    async fn health_reports_the_service_probe() {
        let stub = StubAnalysis {
            reply: StubReply::Full,
            healthy: false,
        };
        let router = create_router(AppState::new(Arc::new(stub)));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["analysis_service"], false);
    }
}
