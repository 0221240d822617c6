use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain message body, used for not-found style failures and simple acknowledgements.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// A single failed input check.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FieldError {
    /// Human readable message, e.g. "Status is required"
    pub msg: String,
    /// Name of the offending field
    pub param: String,
    /// Where the field was read from; always "body" for this API
    pub location: String,
}

/// Body of every 400 response caused by invalid input.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}
