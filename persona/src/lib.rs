mod handlers;
mod reply;

pub use crate::reply::{PersonalityCategory, extract_topic, generate_reply, personality_category};

use crate::handlers::{chat, health};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

pub fn init(router: Router<()>) -> Router<()> {
    router
        .route("/chat", post(chat))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
}
