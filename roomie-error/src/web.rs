use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::{llm::LlmError, storage::StorageError, RMError};

/// Public text for 500s that are not upstream failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// One offending request field, reported back to the client on 400.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),
    #[error("BadRequest: `{0}`")]
    BadRequest(String),
    #[error("`{0}` not found")]
    NotFound(String),
    #[error("InternalError: `{0}`")]
    InternalError(String),
    #[error("DBError: `{0}`")]
    StorageError(#[from] StorageError),
    /// Upstream LLM failure; the payload is the public message, the source is only logged
    #[error("{0}")]
    Upstream(&'static str, #[source] LlmError),
}

impl From<std::io::Error> for WebError {
    fn from(e: std::io::Error) -> Self {
        WebError::InternalError(e.to_string())
    }
}

impl From<sea_orm::DbErr> for WebError {
    fn from(e: sea_orm::DbErr) -> Self {
        WebError::StorageError(StorageError::DBError(e))
    }
}

impl From<RMError> for WebError {
    fn from(e: RMError) -> Self {
        match e {
            RMError::StorageError(StorageError::EntityNotFound(msg)) => WebError::NotFound(msg),
            RMError::StorageError(other) => WebError::StorageError(other),
            other => WebError::InternalError(other.to_string()),
        }
    }
}

impl ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        match self {
            WebError::Validation(details) => HttpResponse::BadRequest().json(json!({
                "error": "Validation failed",
                "details": details,
            })),
            WebError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({
                "error": "Bad Request",
                "message": msg,
            })),
            WebError::NotFound(_) => HttpResponse::NotFound().json(json!({
                "error": "Not Found",
                "message": self.to_string(),
            })),
            // The cause is logged by the handler; clients get a fixed message.
            WebError::InternalError(_) | WebError::StorageError(_) => {
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal Server Error",
                    "message": INTERNAL_ERROR_MESSAGE,
                }))
            }
            // Upstream detail stays in the logs.
            WebError::Upstream(public, _) => {
                HttpResponse::InternalServerError().json(json!({ "error": public }))
            }
        }
    }
}
