//! Fruitcast Server Library
//!
//! This module exposes the server components for testing and embedding.

pub mod api;
pub mod error;
pub mod multipart;
pub mod state;

use fruitcast_media::{PatternConfig, PatternProvider, SourceProvider};
use std::sync::Arc;

/// Create the server application with the default synthetic frame source.
pub fn create_app(config: state::Config) -> axum::Router {
    let provider = Arc::new(PatternProvider::new(PatternConfig {
        width: config.frame_width,
        height: config.frame_height,
        jpeg_quality: config.jpeg_quality,
    }));
    create_app_with_source(config, provider)
}

/// Create the server application around an arbitrary frame source provider.
pub fn create_app_with_source(
    config: state::Config,
    provider: Arc<dyn SourceProvider>,
) -> axum::Router {
    let app_state = state::AppState::new(config, provider);
    api::create_router(app_state)
}
