mod handlers;
mod store;

pub use crate::handlers::messages::STREAM_SENTENCE;
pub use crate::store::{AppState, MemoryStore, Store, StoreError, StoreResult};

use crate::handlers::{
    create_character, create_session, delete_character, get_character, get_session,
    list_characters, send_message, stream_message, update_character,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub fn routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/characters",
            get(list_characters).post(create_character),
        )
        .route(
            "/api/characters/{character_id}",
            get(get_character)
                .put(update_character)
                .delete(delete_character),
        )
        .route("/api/chat/sessions", post(create_session))
        .route("/api/chat/sessions/{session_id}", get(get_session))
        .route(
            "/api/chat/sessions/{session_id}/messages",
            post(send_message),
        )
        .route(
            "/api/chat/sessions/{session_id}/stream",
            post(stream_message),
        )
}

pub fn init(router: Router<AppState>) -> Router<()> {
    let state = AppState {
        store: Arc::new(MemoryStore::default()),
    };

    routes(router)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
