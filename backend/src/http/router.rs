//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, compression, tracing).

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS for the dashboard dev server
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Period catalog
        .route("/periods", get(handlers::list_periods))
        .route("/periods/{period_id}", get(handlers::get_period))
        .route("/periods/{period_id}/evaluation", get(handlers::get_period_evaluation))
        // Evaluation
        .route("/evaluation", get(handlers::get_evaluation))
        .route("/evaluation/metrics", post(handlers::compute_metrics))
        .route("/evaluation/tally", post(handlers::tally));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(8 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::db::repositories::LocalRepository;
    use crate::db::repository::PeriodRepository;

    fn app() -> Router {
        let repo = Arc::new(LocalRepository::new()) as Arc<dyn PeriodRepository>;
        create_router(AppState::new(repo))
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["catalog"], "available");
    }

    #[tokio::test]
    async fn test_list_periods() {
        let (status, body) = get_json("/v1/periods").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
        assert_eq!(body["default_period_id"], 1);
        assert_eq!(body["periods"][2]["label"], "Last 90 days");
    }

    #[tokio::test]
    async fn test_get_period_detail() {
        let (status, body) = get_json("/v1/periods/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["label"], "Last 30 days");
        assert_eq!(body["counts"]["true_positives"], 520);
        assert_eq!(body["total"], 3915);
    }

    #[tokio::test]
    async fn test_unknown_period_is_404() {
        let (status, body) = get_json("/v1/periods/99/evaluation").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_non_numeric_period_id_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/v1/periods/abc/evaluation")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_period_evaluation() {
        let (status, body) = get_json("/v1/periods/1/evaluation").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metrics"]["precision"], 0.8);
        assert_eq!(body["summary"]["recall_band"], "good");
        assert_eq!(body["metric_rows"][0]["percentage"], "80.00%");
    }

    #[tokio::test]
    async fn test_evaluation_by_label() {
        let (status, body) = get_json("/v1/evaluation?period=Last%2030%20days").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period"]["period_id"], 2);
        assert_eq!(body["summary"]["recall_band"], "excellent");
        assert_eq!(body["summary"]["precision_band"], "reasonable");
    }

    #[tokio::test]
    async fn test_evaluation_defaults_to_first_period() {
        let (status, body) = get_json("/v1/evaluation").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period"]["label"], "Last 7 days");
    }

    #[tokio::test]
    async fn test_evaluation_empty_label_is_400() {
        let (status, _) = get_json("/v1/evaluation?period=%20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_compute_metrics_all_zero() {
        let (status, body) = post_json(
            "/v1/evaluation/metrics",
            serde_json::json!({
                "true_positives": 0,
                "false_positives": 0,
                "true_negatives": 0,
                "false_negatives": 0
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
        assert_eq!(body["metrics"]["f1"], 0.0);
        assert_eq!(body["summary"]["precision_band"], "too_many_false_alarms");
    }

    #[tokio::test]
    async fn test_tally() {
        let (status, body) = post_json(
            "/v1/evaluation/tally",
            serde_json::json!({
                "outcomes": [
                    {"predicted_fraud": true, "reported_fraud": true},
                    {"predicted_fraud": true, "reported_fraud": false},
                    {"predicted_fraud": false, "reported_fraud": false},
                    {"predicted_fraud": false, "reported_fraud": true}
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["counts"]["true_positives"], 1);
        assert_eq!(body["counts"]["false_negatives"], 1);
        assert_eq!(body["metrics"]["accuracy"], 0.5);
    }
}
