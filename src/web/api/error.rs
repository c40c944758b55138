use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::controller::{ControllerError, GenerationError};

pub enum ApiError {
    Busy,
    NotFound(&'static str),
    Upstream(GenerationError),
    Render(askama::Error),
}

impl From<ControllerError> for ApiError {
    fn from(e: ControllerError) -> Self {
        match e {
            ControllerError::Busy => ApiError::Busy,
        }
    }
}

impl From<GenerationError> for ApiError {
    fn from(e: GenerationError) -> Self {
        ApiError::Upstream(e)
    }
}

impl From<askama::Error> for ApiError {
    fn from(e: askama::Error) -> Self {
        ApiError::Render(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Busy => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new("submission_in_flight")),
            )
                .into_response(),
            ApiError::NotFound(what) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::new(what))).into_response()
            }
            ApiError::Upstream(e) => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::with_message(
                    "service_unavailable",
                    &e.to_string(),
                )),
            )
                .into_response(),
            ApiError::Render(e) => {
                log::error!("Template rendering failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("render_failed")),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: None,
        }
    }

    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}
