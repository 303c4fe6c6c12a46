use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::GenerationError;
use crate::portfolio::sanitize::SanitizationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The wire contract is a flat JSON object: `{"error": <message>}` on every
/// failure, plus `{"raw": <text>}` when the model's output failed document
/// validation (the raw text is the only diagnostic the caller has).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid resume text")]
    InvalidResumeText,

    #[error("Missing GROQ_API_KEY")]
    MissingApiKey,

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("AI did not return valid HTML")]
    InvalidDocument { raw: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<SanitizationError> for AppError {
    fn from(err: SanitizationError) -> Self {
        let SanitizationError::InvalidDocument { raw } = err;
        AppError::InvalidDocument { raw }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidResumeText => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid resume text" }),
            ),
            AppError::MissingApiKey => {
                tracing::error!("GROQ_API_KEY is not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Missing GROQ_API_KEY" }),
                )
            }
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": e.to_string() }),
                )
            }
            AppError::InvalidDocument { raw } => {
                tracing::error!("Model returned invalid HTML ({} bytes raw)", raw.len());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "AI did not return valid HTML", "raw": raw }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": e.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_resume_text_is_400_with_fixed_message() {
        let (status, body) = body_json(AppError::InvalidResumeText).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid resume text" }));
    }

    #[tokio::test]
    async fn test_missing_api_key_is_500() {
        let (status, body) = body_json(AppError::MissingApiKey).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Missing GROQ_API_KEY");
    }

    #[tokio::test]
    async fn test_invalid_document_includes_raw_text() {
        let (status, body) = body_json(AppError::InvalidDocument {
            raw: "Sure! Here is your website:".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "AI did not return valid HTML");
        assert_eq!(body["raw"], "Sure! Here is your website:");
    }

    #[tokio::test]
    async fn test_generation_error_surfaces_detail() {
        let (status, body) = body_json(AppError::Generation(GenerationError::Upstream {
            status: 503,
            message: "over capacity".to_string(),
        }))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("503"));
        assert!(message.contains("over capacity"));
    }
}
