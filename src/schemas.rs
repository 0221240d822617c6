use crate::auth::TokenKeys;
use common::{
    AddExperienceRequest, ExperienceResponse, FieldError, LoginRequest, MessageResponse,
    ProfileResponse, ProfileUser, RegisterRequest, Skills, SocialLinks, TokenResponse,
    UpsertProfileRequest, UserResponse, ValidationErrorResponse,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::time::Duration;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Token signing and verification keys
    pub tokens: TokenKeys,
    /// Upper bound for handling a single request
    pub request_timeout: Duration,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::users::register_user,
        crate::handlers::auth::get_current_user,
        crate::handlers::auth::login,
        crate::handlers::profile::get_my_profile,
        crate::handlers::profile::upsert_profile,
        crate::handlers::profile::get_profiles,
        crate::handlers::profile::get_profile_by_user_id,
        crate::handlers::profile::delete_account,
        crate::handlers::profile::add_experience,
        crate::handlers::profile::delete_experience,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponse,
            FieldError,
            ValidationErrorResponse,
            RegisterRequest,
            LoginRequest,
            TokenResponse,
            UserResponse,
            UpsertProfileRequest,
            Skills,
            AddExperienceRequest,
            ProfileResponse,
            ProfileUser,
            SocialLinks,
            ExperienceResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User registration"),
        (name = "auth", description = "Token issuing and the current user"),
        (name = "profile", description = "Developer profiles and experience"),
    ),
    info(
        title = "DevConnect API",
        description = "Developer profiles: registration, authentication and profile management",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
