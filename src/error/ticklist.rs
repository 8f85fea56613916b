use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error as ThisError;
use tracing::{error, warn};
use validator::ValidationErrors;

#[derive(Debug, ThisError)]
pub enum TicklistError {
    /// Payload parsed but broke one or more field rules.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Request could not be turned into a payload at all (bad JSON, bad path, bad media type).
    #[error("Request rejected: {message}")]
    RequestRejected {
        status: StatusCode,
        code: &'static str,
        message: String,
        debug_message: Option<String>,
    },

    #[error("Todo not found for id={id}")]
    NotFound { id: i64 },

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl TicklistError {
    pub fn status(&self) -> StatusCode {
        match self {
            TicklistError::Validation(_) => StatusCode::BAD_REQUEST,
            TicklistError::RequestRejected { status, .. } => *status,
            TicklistError::NotFound { .. } => StatusCode::NOT_FOUND,
            TicklistError::RactorError(_) | TicklistError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for TicklistError {
    fn from(rejection: JsonRejection) -> Self {
        let debug_message = Some(rejection.body_text());
        match rejection {
            JsonRejection::MissingJsonContentType(_) => TicklistError::RequestRejected {
                status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
                code: "UNSUPPORTED_MEDIA_TYPE",
                message: "Expected request with `Content-Type: application/json`.".to_string(),
                debug_message,
            },
            JsonRejection::JsonSyntaxError(_) => TicklistError::RequestRejected {
                status: StatusCode::BAD_REQUEST,
                code: "INVALID_BODY",
                message: "Request body is not valid JSON.".to_string(),
                debug_message,
            },
            _ => TicklistError::RequestRejected {
                status: StatusCode::BAD_REQUEST,
                code: "INVALID_BODY",
                message: "Request body does not match the expected shape.".to_string(),
                debug_message,
            },
        }
    }
}

impl From<PathRejection> for TicklistError {
    fn from(rejection: PathRejection) -> Self {
        TicklistError::RequestRejected {
            status: StatusCode::BAD_REQUEST,
            code: "INVALID_ID",
            message: "Todo id must be an integer.".to_string(),
            debug_message: Some(rejection.body_text()),
        }
    }
}

impl IntoResponse for TicklistError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_body = match self {
            TicklistError::Validation(errors) => {
                warn!(errors = %errors, "Request validation failed");
                ApiErrorObject {
                    code: "VALIDATION_ERROR".to_string(),
                    message: "Request validation failed.".to_string(),
                    details: serde_json::to_value(&errors).ok(),
                }
            }

            TicklistError::RequestRejected {
                status,
                code,
                message,
                debug_message,
            } => {
                warn!(
                    status = %status,
                    code,
                    message = %message,
                    debug_message = debug_message.as_deref().unwrap_or("-"),
                    "Request rejected"
                );
                ApiErrorObject {
                    code: code.to_string(),
                    message,
                    details: None,
                }
            }

            TicklistError::NotFound { id } => ApiErrorObject {
                code: "NOT_FOUND".to_string(),
                message: format!("Todo not found for id={id}."),
                details: None,
            },

            err @ (TicklistError::RactorError(_) | TicklistError::DatabaseError(_)) => {
                error!(error = %err, "Request failed with internal error");
                ApiErrorObject {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                    details: None,
                }
            }
        };
        (status, Json(ApiErrorBody { inner: error_body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Debug, Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
