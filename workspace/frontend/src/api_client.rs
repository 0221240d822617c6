pub mod auth;
pub mod profile;

use common::{MessageResponse, ValidationErrorResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::{settings, storage};

// API_BASE is retrieved from settings
fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// A failed API call, with every message the server reported
#[derive(Debug, Clone, PartialEq)]
pub struct ClientError {
    pub status: Option<u16>,
    pub messages: Vec<String>,
}

impl ClientError {
    fn transport(msg: String) -> Self {
        Self { status: None, messages: vec![msg] }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages.join("; "))
    }
}

/// Pulls the user-facing messages out of an error body.
///
/// Validation failures carry a list, everything else a single `msg`; a body
/// in neither shape (the plain-text 500) falls back to the status.
pub fn error_messages(status: u16, body: &str) -> Vec<String> {
    if let Ok(validation) = serde_json::from_str::<ValidationErrorResponse>(body) {
        return validation.errors.into_iter().map(|e| e.msg).collect();
    }
    if let Ok(message) = serde_json::from_str::<MessageResponse>(body) {
        return vec![message.msg];
    }
    vec![format!("HTTP error: {}", status)]
}

/// Attaches the stored token, if any, as a bearer token
fn authorized(request: RequestBuilder) -> RequestBuilder {
    match storage::stored_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

async fn parse_response<T>(method: &str, endpoint: &str, response: Response) -> Result<T, ClientError>
where
    T: for<'de> Deserialize<'de>,
{
    if !response.ok() {
        let status = response.status();
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, status);
        let body = response.text().await.unwrap_or_default();
        let messages = error_messages(status, &body);
        log::error!("{} {} - API error: {}", method, endpoint, messages.join("; "));
        return Err(ClientError { status: Some(status), messages });
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let data = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("{} {} - {}", method, endpoint, error_msg);
        ClientError::transport(error_msg)
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(data)
}

fn request_failed(method: &str, endpoint: &str, e: gloo_net::Error) -> ClientError {
    let error_msg = format!("Request failed: {}", e);
    log::error!("{} {} - {}", method, endpoint, error_msg);
    ClientError::transport(error_msg)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, ClientError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = authorized(Request::get(&url))
        .send()
        .await
        .map_err(|e| request_failed("GET", endpoint, e))?;

    parse_response("GET", endpoint, response).await
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ClientError>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = authorized(Request::post(&url))
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            ClientError::transport(error_msg)
        })?
        .send()
        .await
        .map_err(|e| request_failed("POST", endpoint, e))?;

    parse_response("POST", endpoint, response).await
}
