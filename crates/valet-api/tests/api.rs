//! End-to-end tests of the HTTP surface.
//!
//! Each test drives the real router against a temp-file SQLite store and a
//! wiremock stand-in for the OpenAI chat completions endpoint.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use valet_api::http::router::build_router;
use valet_api::state::AppState;
use valet_types::config::AppConfig;

async fn spawn_app(base_url: String, max_history: u32) -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        openai_api_key: SecretString::from("sk-test"),
        model: "gpt-4o-mini".to_string(),
        base_url: Some(base_url),
        database: dir.path().join("memory.db"),
        max_history,
        host: "127.0.0.1".to_string(),
        port: 0,
        web_dir: dir.path().join("no-frontend"),
    };
    let state = AppState::init(&config).await.unwrap();
    let router = build_router(state, &config.web_dir);
    (router, dir)
}

fn post_chat(message: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(message.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A successful chat completions payload with the given reply text.
fn completion_body(reply: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1700000000u32,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": reply },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 42, "completion_tokens": 5, "total_tokens": 47 }
    })
}

async fn mock_completion(reply: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(reply)))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_health() {
    let (app, _dir) = spawn_app("http://127.0.0.1:1".to_string(), 8).await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn test_empty_message_rejected_before_any_side_effect() {
    // The provider endpoint is unreachable on purpose: a validation
    // failure must never get as far as a completion call.
    let (app, _dir) = spawn_app("http://127.0.0.1:1".to_string(), 8).await;

    for body in [json!({}), json!({"message": ""}), json!({"message": "   "})] {
        let response = app.clone().oneshot(post_chat(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "No message provided.");
    }

    let response = app.oneshot(get("/api/history")).await.unwrap();
    assert_eq!(body_json(response).await["history"], json!([]));
}

#[tokio::test]
async fn test_chat_round_trip_persists_both_turns() {
    let server = mock_completion("Hi there").await;
    let (app, _dir) = spawn_app(server.uri(), 8).await;

    let response = app
        .clone()
        .oneshot(post_chat(json!({"message": "Hello"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"reply": "Hi there"}));

    let response = app.oneshot(get("/api/history")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["history"],
        json!([
            {"role": "user", "content": "Hello"},
            {"role": "assistant", "content": "Hi there"}
        ])
    );
}

#[tokio::test]
async fn test_provider_failure_returns_500_and_never_pollutes_history() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Incorrect API key provided: sk-test.",
                "type": "invalid_request_error",
                "param": null,
                "code": "invalid_api_key"
            }
        })))
        .mount(&server)
        .await;
    let (app, _dir) = spawn_app(server.uri(), 8).await;

    let response = app
        .clone()
        .oneshot(post_chat(json!({"message": "Hello"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error = body_json(response).await["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(error.starts_with("Error contacting language model:"));

    // Only the user row was written; the error text is not in the log.
    let response = app.oneshot(get("/api/history")).await.unwrap();
    let history = body_json(response).await["history"].clone();
    assert_eq!(
        history,
        json!([{"role": "user", "content": "Hello"}])
    );
}

#[tokio::test]
async fn test_history_window_is_bounded_and_oldest_first() {
    let server = mock_completion("noted").await;
    let (app, _dir) = spawn_app(server.uri(), 2).await;

    for n in 1..=3 {
        let response = app
            .clone()
            .oneshot(post_chat(json!({"message": format!("message {n}")})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Six rows stored, window of two turns: the last four, oldest first.
    let response = app.oneshot(get("/api/history")).await.unwrap();
    assert_eq!(
        body_json(response).await["history"],
        json!([
            {"role": "user", "content": "message 2"},
            {"role": "assistant", "content": "noted"},
            {"role": "user", "content": "message 3"},
            {"role": "assistant", "content": "noted"}
        ])
    );
}
