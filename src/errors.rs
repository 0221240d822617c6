use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use common::{FieldError, MessageResponse, ValidationErrorResponse};
use sea_orm::DbErr;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

/// Body of every 5xx response. Details only go to the log.
pub const SERVER_ERROR: &str = "Server error";

/// Error type returned by every handler and extractor.
#[derive(Error, Debug)]
pub enum ApiError {
    /// One or more request fields failed validation (400)
    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    /// Missing records and malformed identifiers (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or invalid token (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Error from the database operations (500)
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// Anything else that should never reach the client in detail (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        ApiError::Unauthorized(msg.into())
    }

    /// A validation failure for a single field.
    pub fn field(param: &str, msg: impl Into<String>) -> Self {
        ApiError::Validation(vec![FieldError {
            msg: msg.into(),
            param: param.to_string(),
            location: "body".to_string(),
        }])
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |err| FieldError {
                    msg: err
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field)),
                    param: field.to_string(),
                    location: "body".to_string(),
                })
            })
            .collect();
        // field_errors() is a HashMap, keep responses deterministic
        fields.sort_by(|a, b| a.param.cmp(&b.param));
        ApiError::Validation(fields)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected request body: {}", rejection.body_text());
        ApiError::field("body", rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ValidationErrorResponse { errors })).into_response()
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(MessageResponse::new(msg))).into_response()
            }
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, Json(MessageResponse::new(msg))).into_response()
            }
            ApiError::Database(db_error) => {
                error!("Database error while handling request: {}", db_error);
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR).into_response()
            }
            ApiError::Internal(msg) => {
                error!("Internal error while handling request: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR).into_response()
            }
        }
    }
}
