use crate::store::StoreError;
use axum::{Json, http::StatusCode};
use shared::models::ApiResponse;

pub mod characters;
pub mod messages;
pub mod sessions;

pub use characters::*;
pub use messages::*;
pub use sessions::*;

/// Error half of every handler: an envelope body with the matching HTTP status.
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

pub(crate) fn not_found(message: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error(message, 404)),
    )
}

pub(crate) fn internal_error(err: StoreError) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(err.to_string(), 500)),
    )
}
