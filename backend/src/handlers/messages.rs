use crate::AppState;
use crate::handlers::{ApiError, internal_error, not_found};
use crate::store::StoreError;
use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use shared::models::{ApiResponse, Message, ROLE_ASSISTANT, SendMessageRequest, StreamRequest};
use std::io::Error;
use std::time::Duration;
use uuid::Uuid;

/// Canned assistant reply for the non-streaming endpoint.
const CANNED_REPLY: &str = "This is a sample AI response. Implement your AI logic here.";

/// Fixed sentence emitted one character at a time by the stream endpoint.
pub const STREAM_SENTENCE: &str =
    "This is a streaming response. Implement your AI logic to stream tokens here.";

const STREAM_CHAR_DELAY: Duration = Duration::from_millis(50);

pub async fn send_message(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<ApiResponse<Message>>, ApiError> {
    let session = state
        .store
        .get_session(session_id)
        .await
        .map_err(|e| match e {
            StoreError::NotFound(_) => not_found("Session not found"),
            e => {
                tracing::error!("Failed to get session: {:?}", e);
                internal_error(e)
            }
        })?;

    let user_message = Message::new(session.character_id, payload.role, payload.content);
    state
        .store
        .append_message(session_id, user_message)
        .await
        .map_err(|e| {
            tracing::error!("Failed to append message: {:?}", e);
            internal_error(e)
        })?;

    let reply = Message::new(session.character_id, ROLE_ASSISTANT, CANNED_REPLY);
    state
        .store
        .append_message(session_id, reply.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to append reply: {:?}", e);
            internal_error(e)
        })?;

    Ok(Json(ApiResponse::data(reply, 200)))
}

/// Emits the fixed sentence as a text/plain stream, one character per chunk,
/// pausing 50 ms after each one. The request body and session id are accepted
/// for interface compatibility but do not change the output.
pub async fn stream_message(
    Path(_session_id): Path<Uuid>,
    Json(_payload): Json<StreamRequest>,
) -> axum::response::Response {
    let body = axum::body::Body::from_stream(async_stream::stream! {
        for ch in STREAM_SENTENCE.chars() {
            yield Ok::<String, Error>(ch.to_string());
            tokio::time::sleep(STREAM_CHAR_DELAY).await;
        }
    });

    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}
