//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let audio_limit = state.config.server.max_body_size_audio_bytes;
    let json_limit = state.config.server.max_body_size_json_bytes;
    let audio_dir = state.config.storage.audio_dir.clone();

    let json_routes = Router::new()
        .route("/api/practice/submit", post(handlers::practice::submit))
        .route("/api/scenario/generate", post(handlers::scenario::generate))
        .layer(DefaultBodyLimit::max(json_limit));

    let audio_routes = Router::new()
        .route(
            "/api/practice/submit-audio",
            post(handlers::practice::submit_audio),
        )
        .route("/api/transcribe", post(handlers::transcribe::transcribe))
        .layer(DefaultBodyLimit::max(audio_limit));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/notes", get(handlers::notes::list_notes))
        .route("/api/notes/{id}", get(handlers::notes::get_note))
        .route("/api/languages", get(handlers::languages::list_languages))
        .merge(json_routes)
        .merge(audio_routes)
        .nest_service("/static/audio", ServeDir::new(audio_dir))
        .with_state(state)
}
