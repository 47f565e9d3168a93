pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::guidance::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate-roadmap", post(handlers::handle_generate_roadmap))
        .route("/chat", post(handlers::handle_chat))
        .route("/analyze-resume", post(handlers::handle_analyze_resume))
        .route("/track-progress", post(handlers::handle_track_progress))
        .route("/compare-resumes", post(handlers::handle_compare_resumes))
        .route("/progress-history", get(handlers::handle_progress_history))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::guidance::fallback::fallback_for;
    use crate::guidance::models::{GuidanceRequest, ResumeComparisonRequest};
    use crate::interpret::Interpreter;
    use crate::llm_client::scripted::ScriptedGateway;
    use crate::progress::InMemoryProgressStore;

    fn app_with(gateway: Arc<ScriptedGateway>) -> Router {
        build_router(AppState {
            llm: gateway,
            interpreter: Interpreter::default(),
            progress: Arc::new(InMemoryProgressStore::default()),
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with(Arc::new(ScriptedGateway::failing()));
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_empty_required_inputs_are_rejected_without_model_call() {
        let cases = [
            ("/chat", json!({"query": ""}), "No query provided"),
            ("/analyze-resume", json!({}), "No resume text provided"),
            (
                "/track-progress",
                json!({"achievements": "   "}),
                "No achievements provided",
            ),
            (
                "/compare-resumes",
                json!({"user_resume": "Mine", "peer_resume": ""}),
                "Both user and peer resumes are required",
            ),
            (
                "/compare-resumes",
                json!({"peer_resume": "Theirs"}),
                "Both user and peer resumes are required",
            ),
        ];

        for (uri, body, message) in cases {
            let gateway = Arc::new(ScriptedGateway::replying("{}"));
            let response = app_with(gateway.clone())
                .oneshot(post_json(uri, body))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(json_body(response).await, json!({ "error": message }));
            assert_eq!(gateway.calls(), 0, "{uri} must not call the model");
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_400() {
        let gateway = Arc::new(ScriptedGateway::replying("{}"));
        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app_with(gateway.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_service_error_returns_200_with_fallback() {
        let gateway = Arc::new(ScriptedGateway::failing());
        let body = json!({"user_resume": "Rust dev", "peer_resume": "Java dev"});

        let response = app_with(gateway.clone())
            .oneshot(post_json("/compare-resumes", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let expected = fallback_for(&GuidanceRequest::ResumeComparison(
            ResumeComparisonRequest::default(),
        ));
        assert_eq!(json_body(response).await, expected);
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_roadmap_success_returns_model_array() {
        let reply = r#"```json
[{"milestone": "Learn SQL", "timeframe": "0-3 months", "description": "Basics",
  "skills": ["SQL"], "resources": [{"name": "SQLBolt", "url": "https://sqlbolt.com"}]}]
```"#;
        let gateway = Arc::new(ScriptedGateway::replying(reply));

        let response = app_with(gateway)
            .oneshot(post_json("/generate-roadmap", json!({"careerGoal": "Data Analyst"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["milestone"], "Learn SQL");
    }

    #[tokio::test]
    async fn test_roadmap_fallback_echoes_goal() {
        let gateway = Arc::new(ScriptedGateway::replying("[{\"milestone\": \"only\"}]"));

        let response = app_with(gateway)
            .oneshot(post_json("/generate-roadmap", json!({"careerGoal": "Nurse"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body[0]["milestone"], "Start Your Nurse Journey");
    }

    #[tokio::test]
    async fn test_chat_wraps_text() {
        let gateway = Arc::new(ScriptedGateway::replying("- Practice interviews"));

        let response = app_with(gateway)
            .oneshot(post_json("/chat", json!({"query": "Interview tips?"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"response": "- Practice interviews"})
        );
    }

    #[tokio::test]
    async fn test_chat_fallback_on_outage() {
        let gateway = Arc::new(ScriptedGateway::failing());

        let response = app_with(gateway)
            .oneshot(post_json("/chat", json!({"query": "Interview tips?"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["response"]
            .as_str()
            .unwrap()
            .starts_with("- Sorry, I couldn't process that."));
    }

    #[tokio::test]
    async fn test_track_progress_accumulates_history() {
        let gateway = Arc::new(ScriptedGateway::sequence(vec![
            Some(r#"{"progress_score": 70, "suggestions": ["a"], "week": 1}"#),
            Some("Here: {'progress_score': 82.5, 'suggestions': ['b']}"),
            None,
            Some(r#"{"progress_score": 90, "suggestions": [], "week": 12}"#),
        ]));
        let app = app_with(gateway.clone());

        let mut last = Value::Null;
        for _ in 0..4 {
            let response = app
                .clone()
                .oneshot(post_json(
                    "/track-progress",
                    json!({"achievements": "Shipped a feature"}),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            last = json_body(response).await;
        }

        assert_eq!(gateway.calls(), 4);
        assert_eq!(
            last["history"],
            json!([
                {"week": 1, "score": 70},
                {"week": 2, "score": 82.5},
                {"week": 3, "score": 50},
                {"week": 12, "score": 90}
            ])
        );
        assert_eq!(last["current"]["week"], 12);
        assert_eq!(last["current"]["progress_score"], 90);

        let request = Request::builder()
            .uri("/progress-history")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(json_body(response).await, last["history"]);
    }

    #[tokio::test]
    async fn test_track_progress_fallback_fills_week() {
        let gateway = Arc::new(ScriptedGateway::failing());

        let response = app_with(gateway)
            .oneshot(post_json("/track-progress", json!({"achievements": "Read a book"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["current"]["progress_score"], 50);
        assert_eq!(body["current"]["week"], 1);
        assert_eq!(body["current"]["suggestions"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["history"], json!([{"week": 1, "score": 50}]));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = app_with(Arc::new(ScriptedGateway::failing()));
        let request = Request::builder()
            .uri("/nope")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
