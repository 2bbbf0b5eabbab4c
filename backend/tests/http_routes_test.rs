//! In-process tests for the HTTP routes
//!
//! Drive the full router (middleware included) without binding a socket.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use string_service_backend::{build_router, state::AppState};
use tower::ServiceExt;

fn create_test_app() -> Router {
    build_router(AppState::new())
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = create_test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_count_hello() {
    let (status, body) = send(post_json("/count", r#"{"s":"hello"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"v": 5}));
}

#[tokio::test]
async fn test_count_empty() {
    let (status, body) = send(post_json("/count", r#"{"s":""}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"v": 0}));
}

#[tokio::test]
async fn test_uppercase_hello_has_no_err_field() {
    let (status, body) = send(post_json("/uppercase", r#"{"s":"hello"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"v": "HELLO"}));
    assert!(!body.as_object().unwrap().contains_key("err"));
}

#[tokio::test]
async fn test_uppercase_empty_returns_ok_with_err() {
    let (status, body) = send(post_json("/uppercase", r#"{"s":""}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"v": "", "err": "Empty String"}));
}

#[tokio::test]
async fn test_uppercase_missing_field_is_empty_input() {
    let (status, body) = send(post_json("/uppercase", "{}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["err"], "Empty String");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    for uri in ["/uppercase", "/count"] {
        let (status, body) = send(post_json(uri, r#"{"s": "#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "route {uri}");
        assert_eq!(body["status"], 400);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request"));
    }
}

#[tokio::test]
async fn test_body_without_content_type_is_decoded() {
    let request = Request::builder()
        .method("POST")
        .uri("/count")
        .body(Body::from(r#"{"s":"abc"}"#))
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["v"], 3);
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let response = create_test_app()
        .oneshot(post_json("/count", r#"{"s":"x"}"#))
        .await
        .unwrap();
    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("request id header should be set");
    assert!(uuid::Uuid::parse_str(request_id.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_get_on_post_route_is_not_allowed() {
    let request = Request::builder()
        .uri("/count")
        .body(Body::empty())
        .unwrap();
    let response = create_test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route() {
    let response = create_test_app()
        .oneshot(post_json("/reverse", r#"{"s":"x"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_count_non_ascii_is_byte_length() {
    let (status, body) = send(post_json("/count", r#"{"s":"héllo"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"v": 6}));

    let (_, body) = send(post_json("/count", r#"{"s":"日本"}"#)).await;
    assert_eq!(body, json!({"v": 6}));
}

#[tokio::test]
async fn test_uppercase_null_field_is_empty_input() {
    let (status, body) = send(post_json("/uppercase", r#"{"s":null}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"v": "", "err": "Empty String"}));
}

#[tokio::test]
async fn test_null_body_decodes_as_empty_request() {
    let (status, body) = send(post_json("/uppercase", "null")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"v": "", "err": "Empty String"}));

    let (status, body) = send(post_json("/count", "null")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"v": 0}));
}

#[tokio::test]
async fn test_trailing_data_after_first_value_is_ignored() {
    let (status, body) = send(post_json("/uppercase", r#"{"s":"a"} trailing"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"v": "A"}));
}

#[tokio::test]
async fn test_capitalized_key_is_accepted() {
    let (status, body) = send(post_json("/uppercase", r#"{"S":"hello"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"v": "HELLO"}));

    let (_, body) = send(post_json("/count", r#"{"S":"hello"}"#)).await;
    assert_eq!(body, json!({"v": 5}));
}

#[tokio::test]
async fn test_empty_body_is_rejected() {
    let (status, body) = send(post_json("/count", "")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}
