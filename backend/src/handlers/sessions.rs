use crate::AppState;
use crate::handlers::{ApiError, internal_error, not_found};
use crate::store::StoreError;
use axum::{Json, extract::Path, extract::State, http::StatusCode};
use shared::models::{ApiResponse, ChatSession, CreateSessionRequest};
use uuid::Uuid;

pub async fn create_session(
    State(state): State<AppState>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ChatSession>>), ApiError> {
    let session = ChatSession::new(payload.character_id, payload.user_id);

    state
        .store
        .create_session(session.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to create session: {:?}", e);
            internal_error(e)
        })?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(session, 201))))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ApiResponse<ChatSession>>, ApiError> {
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
    Ok(Json(ApiResponse::data(session, 200)))
}
