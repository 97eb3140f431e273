use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fruitcast_media::MediaError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Media(#[from] MediaError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Media(MediaError::ResourceUnavailable(reason)) => {
                tracing::warn!("capture source unavailable: {}", reason);
                (StatusCode::SERVICE_UNAVAILABLE, self.to_string())
            }
            AppError::Media(e) => {
                tracing::error!("media error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
