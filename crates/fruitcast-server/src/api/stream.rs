use crate::error::{AppError, Result};
use crate::multipart;
use crate::state::AppState;
use axum::{body::Body, extract::State, http::header, response::Response};
use fruitcast_media::Session;
use futures_util::StreamExt;
use std::convert::Infallible;

/// Stream a fresh capture session to the client.
///
/// Each connection gets its own session so the underlying source is opened
/// fresh and all state is reset. When the client disconnects, the body
/// stream is dropped and the session releases its source.
pub async fn video_feed(State(state): State<AppState>) -> Result<Response> {
    let provider = state.provider.clone();
    let frame_interval = state.config.frame_interval();

    // Source acquisition may block on the underlying device.
    let session =
        tokio::task::spawn_blocking(move || Session::open(provider.as_ref(), frame_interval))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("session setup task failed: {e}")))??;

    tracing::info!("session {} streaming to new client", session.id());

    let parts = session
        .into_frames()
        .map(|frame| Ok::<_, Infallible>(multipart::encode_part(&frame)));

    Response::builder()
        .header(header::CONTENT_TYPE, multipart::content_type())
        .body(Body::from_stream(parts))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to build response: {e}")))
}
