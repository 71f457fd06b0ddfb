use crate::AppState;
use crate::handlers::{ApiError, internal_error, not_found};
use crate::store::StoreError;
use axum::{Json, extract::Path, extract::State, http::StatusCode};
use shared::models::{ApiResponse, Character, CreateCharacterRequest};
use uuid::Uuid;

pub async fn list_characters(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Character>>>, ApiError> {
    let characters = state.store.get_characters().await.map_err(|e| {
        tracing::error!("Failed to list characters: {:?}", e);
        internal_error(e)
    })?;
    Ok(Json(ApiResponse::data(characters, 200)))
}

pub async fn get_character(
    State(state): State<AppState>,
    Path(character_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Character>>, ApiError> {
    let character = state
        .store
        .get_character(character_id)
        .await
        .map_err(|e| match e {
            StoreError::NotFound(_) => not_found("Character not found"),
            e => {
                tracing::error!("Failed to get character: {:?}", e);
                internal_error(e)
            }
        })?;
    Ok(Json(ApiResponse::data(character, 200)))
}

pub async fn create_character(
    State(state): State<AppState>,
    Json(payload): Json<CreateCharacterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Character>>), ApiError> {
    let character = Character::from_request(payload);

    state
        .store
        .create_character(character.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to create character: {:?}", e);
            internal_error(e)
        })?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(character, 201))))
}

pub async fn update_character(
    State(state): State<AppState>,
    Path(character_id): Path<Uuid>,
    Json(payload): Json<CreateCharacterRequest>,
) -> Result<Json<ApiResponse<Character>>, ApiError> {
    let mut character = state
        .store
        .get_character(character_id)
        .await
        .map_err(|e| match e {
            StoreError::NotFound(_) => not_found("Character not found"),
            e => {
                tracing::error!("Failed to get character: {:?}", e);
                internal_error(e)
            }
        })?;

    character.apply(payload);

    state
        .store
        .update_character(character.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to update character: {:?}", e);
            internal_error(e)
        })?;

    Ok(Json(ApiResponse::data(character, 200)))
}

pub async fn delete_character(
    State(state): State<AppState>,
    Path(character_id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    match state.store.delete_character(character_id).await {
        Ok(()) => Ok(Json(ApiResponse::message("Character deleted", 200))),
        Err(StoreError::NotFound(_)) => Err(not_found("Character not found")),
        Err(e) => {
            tracing::error!("Failed to delete character: {:?}", e);
            Err(internal_error(e))
        }
    }
}
