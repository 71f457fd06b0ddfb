use crate::reply::generate_reply;
use axum::{Json, http::StatusCode};
use chrono::Utc;
use serde::Serialize;
use shared::models::{ChatRequest, ChatResponse};

pub async fn chat(
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    let response = generate_reply(&payload.message, &payload.character_context).ok_or_else(
        || {
            tracing::error!(
                "No reply generated for character {}",
                payload.character_id
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate a reply".to_string(),
            )
        },
    )?;

    Ok(Json(ChatResponse { response }))
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}
