use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
#[allow(dead_code)]
pub enum AppError {
    Unauthorized(String),
    BadRequest(String),
    Internal(String),
    Orchestration(orchestrator::OrchestratorError),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            AppError::Unauthorized(msg) => (StatusCode::FORBIDDEN, "invalid_secret", msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
            AppError::Orchestration(err) => {
                tracing::error!("Round failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    err.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<orchestrator::OrchestratorError> for AppError {
    fn from(err: orchestrator::OrchestratorError) -> Self {
        AppError::Orchestration(err)
    }
}
