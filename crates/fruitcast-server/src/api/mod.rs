mod pages;
mod stream;

use crate::state::AppState;
use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Index page
        .route("/", get(pages::index))
        // Live video stream, one session per connection
        .route("/video_feed", get(stream::video_feed))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
