use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assets::AssetError;
use crate::resume::ResumeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Resume(#[from] ResumeError),

    #[error(transparent)]
    Assets(#[from] AssetError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Resume(ResumeError::Read { .. }) => "RESUME_UNREADABLE",
            AppError::Resume(ResumeError::Syntax { .. } | ResumeError::Shape { .. }) => {
                "RESUME_MALFORMED"
            }
            AppError::Resume(ResumeError::Invalid { .. }) => "RESUME_INVALID",
            AppError::Assets(_) => "ASSETS_UNREADABLE",
            AppError::Template(_) | AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        // Every variant is a server-side fault: the page cannot be produced.
        let message = match &self {
            AppError::Resume(e) => {
                tracing::error!("Résumé error: {e}");
                "The résumé data could not be loaded"
            }
            AppError::Assets(e) => {
                tracing::error!("Asset error: {e}");
                "The static assets could not be listed"
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                "The page could not be rendered"
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred"
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
