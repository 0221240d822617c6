use common::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
use crate::api_client::{self, ClientError};

/// Load the user the stored token belongs to
pub async fn load_user() -> Result<UserResponse, ClientError> {
    log::trace!("Loading current user");
    let result: Result<UserResponse, ClientError> = api_client::get("/auth").await;
    match &result {
        Ok(user) => log::info!("Loaded user {}", user.id),
        Err(e) => log::warn!("Failed to load user: {}", e),
    }
    result
}

/// Register a new user and return the issued token
pub async fn register(request: &RegisterRequest) -> Result<TokenResponse, ClientError> {
    log::trace!("Registering user with email: {}", request.email);
    let result = api_client::post("/users", request).await;
    if let Err(e) = &result {
        log::error!("Registration failed: {}", e);
    }
    result
}

/// Exchange credentials for a token
pub async fn login(request: &LoginRequest) -> Result<TokenResponse, ClientError> {
    log::trace!("Logging in with email: {}", request.email);
    let result = api_client::post("/auth", request).await;
    if let Err(e) = &result {
        log::error!("Login failed: {}", e);
    }
    result
}
