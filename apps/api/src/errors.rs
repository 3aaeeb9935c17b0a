use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::extraction::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Parse failure: {0}")]
    ParseFailure(String),

    /// A non-success answer from an upstream API, relayed with its status.
    #[error("Upstream error (status {status}): {detail}")]
    Upstream { status: StatusCode, detail: Value },

    #[error("Not configured: {0}")]
    NotConfigured(String),

    /// A failure whose message is safe to show the client as-is.
    #[error("{0}")]
    Unexpected(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::UnsupportedMediaType(_) => AppError::UnsupportedMediaType(err.to_string()),
            ExtractionError::ParseFailure(_) => AppError::ParseFailure(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut detail = None;
        let (status, code, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            AppError::UnsupportedMediaType(msg) => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_MEDIA_TYPE", msg)
            }
            AppError::ParseFailure(msg) => {
                tracing::warn!("Resume parse failure: {msg}");
                (StatusCode::UNPROCESSABLE_ENTITY, "PARSE_FAILURE", msg)
            }
            AppError::Upstream {
                status,
                detail: body,
            } => {
                tracing::error!("Upstream error {status}: {body}");
                detail = Some(body);
                (
                    status,
                    "UPSTREAM_ERROR",
                    format!("Upstream service responded with status {}", status.as_u16()),
                )
            }
            AppError::NotConfigured(msg) => {
                tracing::error!("Missing configuration: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "NOT_CONFIGURED", msg)
            }
            AppError::Unexpected(msg) => {
                tracing::error!("{msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "UNEXPECTED_ERROR", msg)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(detail) = detail {
            error["detail"] = detail;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unsupported_media_type_is_bad_request() {
        let err: AppError = ExtractionError::UnsupportedMediaType("text/plain".into()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("'text/plain'"));
    }

    #[tokio::test]
    async fn test_parse_failure_is_unprocessable_and_keeps_cause() {
        let err: AppError = ExtractionError::ParseFailure("invalid Zip archive".into()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(
            body["error"]["message"],
            "Failed to parse resume file: invalid Zip archive"
        );
    }

    #[tokio::test]
    async fn test_upstream_error_relays_status_and_detail() {
        let response = AppError::Upstream {
            status: StatusCode::UNAUTHORIZED,
            detail: json!({"error": "invalid_grant"}),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
        assert_eq!(body["error"]["detail"]["error"], "invalid_grant");
    }

    #[tokio::test]
    async fn test_unexpected_error_keeps_message() {
        let response =
            AppError::Unexpected("An unexpected error occurred: connection refused".into())
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "UNEXPECTED_ERROR");
        assert_eq!(
            body["error"]["message"],
            "An unexpected error occurred: connection refused"
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let response = AppError::Internal(anyhow::anyhow!("secret path")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "An internal server error occurred");
    }
}
