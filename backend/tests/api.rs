use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::time::{Duration, Instant};
use tower::ServiceExt;

fn test_app() -> Router {
    backend::init(Router::new())
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_value(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn character_payload(name: &str) -> Value {
    json!({
        "name": name,
        "personality": "warm and playful",
        "description": "A cheerful companion",
        "traits": ["playful", "caring"],
        "greeting": "Hi there!",
        "background": "Grew up by the sea",
        "likes": ["stargazing"],
        "dislikes": ["rainy mondays"],
        "conversationStyle": "casual"
    })
}

#[tokio::test]
async fn empty_store_lists_no_characters() {
    let app = test_app();
    let response = app.oneshot(get_request("/api/characters")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], br#"{"data":[],"status":200}"#);
}

#[tokio::test]
async fn unknown_character_is_not_found() {
    let app = test_app();
    let response = app
        .oneshot(get_request(
            "/api/characters/00000000-0000-0000-0000-000000000000",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_value(response).await;
    assert_eq!(body["error"], "Character not found");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn character_crud_round_trip() {
    let app = test_app();

    // Create
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/characters",
            character_payload("Luna"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_value(response).await;
    assert_eq!(body["status"], 201);
    assert_eq!(body["data"]["name"], "Luna");
    assert_eq!(body["data"]["isActive"], true);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    // Read back
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/characters/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_value(response).await;
    assert_eq!(body["data"]["id"], id.as_str());

    // Update
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/characters/{}", id),
            character_payload("Nova"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_value(response).await;
    assert_eq!(body["data"]["name"], "Nova");
    assert_eq!(body["data"]["id"], id.as_str());

    // List now holds exactly one
    let response = app
        .clone()
        .oneshot(get_request("/api/characters"))
        .await
        .unwrap();
    let body = body_value(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // Delete
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/characters/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_value(response).await;
    assert_eq!(body["message"], "Character deleted");
    assert_eq!(body["status"], 200);

    // Gone
    let response = app
        .oneshot(get_request(&format!("/api/characters/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_of_unknown_character_is_not_found() {
    let app = test_app();
    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/characters/00000000-0000-0000-0000-000000000000",
            character_payload("Ghost"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn new_session_starts_empty() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/chat/sessions",
            json!({"characterId": "3fa85f64-5717-4562-b3fc-2c963f66afa6"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_value(response).await;
    assert_eq!(body["status"], 201);
    assert_eq!(body["data"]["messages"].as_array().unwrap().len(), 0);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(get_request(&format!("/api/chat/sessions/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_value(response).await;
    assert_eq!(body["data"]["id"], id.as_str());
}

#[tokio::test]
async fn unknown_session_is_not_found() {
    let app = test_app();
    let response = app
        .oneshot(get_request(
            "/api/chat/sessions/00000000-0000-0000-0000-000000000000",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_value(response).await;
    assert_eq!(body["error"], "Session not found");
}

#[tokio::test]
async fn send_message_returns_assistant_reply_and_records_both() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/chat/sessions",
            json!({"characterId": "3fa85f64-5717-4562-b3fc-2c963f66afa6"}),
        ))
        .await
        .unwrap();
    let body = body_value(response).await;
    let session_id = body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/chat/sessions/{}/messages", session_id),
            json!({"content": "hello there", "role": "user"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_value(response).await;
    assert_eq!(body["status"], 200);
    assert_eq!(body["data"]["role"], "assistant");
    assert!(!body["data"]["content"].as_str().unwrap().is_empty());

    let response = app
        .oneshot(get_request(&format!("/api/chat/sessions/{}", session_id)))
        .await
        .unwrap();
    let body = body_value(response).await;
    let messages = body["data"]["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "user");
    assert_eq!(messages[0]["content"], "hello there");
    assert_eq!(messages[1]["role"], "assistant");
}

#[tokio::test]
async fn message_to_unknown_session_is_not_found() {
    let app = test_app();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/chat/sessions/00000000-0000-0000-0000-000000000000/messages",
            json!({"content": "hello"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stream_emits_one_chunk_per_character_with_delays() {
    let app = test_app();
    let expected: Vec<String> = backend::STREAM_SENTENCE
        .chars()
        .map(|c| c.to_string())
        .collect();

    let start = Instant::now();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/chat/sessions/3fa85f64-5717-4562-b3fc-2c963f66afa6/stream",
            json!({"content": "say something"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );

    let mut body = response.into_body();
    let mut chunks = Vec::new();
    while let Some(frame) = body.frame().await {
        let frame = frame.unwrap();
        if let Some(data) = frame.data_ref() {
            chunks.push(String::from_utf8(data.to_vec()).unwrap());
        }
    }
    let elapsed = start.elapsed();

    assert_eq!(chunks, expected);
    let min = Duration::from_millis(50) * (expected.len() as u32 - 1);
    assert!(
        elapsed >= min,
        "stream finished in {:?}, expected at least {:?}",
        elapsed,
        min
    );
}
