use crate::auth::{AuthUser, verify_password};
use crate::errors::ApiError;
use crate::extractors::ValidatedJson;
use crate::schemas::AppState;
use axum::{extract::State, response::Json};
use common::{LoginRequest, TokenResponse, UserResponse};
use model::entities::user;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use tracing::{info, instrument, trace, warn};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

fn user_response(model: user::Model) -> UserResponse {
    UserResponse {
        id: model.id,
        name: model.name,
        email: model.email,
        avatar: model.avatar,
        created_at: model.created_at,
    }
}

/// Get the user the token was issued for
#[utoipa::path(
    get,
    path = "/api/auth",
    tag = "auth",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = String)
    )
)]
#[instrument(skip(state))]
pub async fn get_current_user(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    trace!("Entering get_current_user function for user_id: {}", auth.user_id);

    match user::Entity::find_by_id(auth.user_id).one(&state.db).await? {
        Some(user_model) => {
            info!("Loaded current user {}", user_model.id);
            Ok(Json(user_response(user_model)))
        }
        None => {
            // The account was deleted after the token was issued
            warn!("Token refers to missing user {}", auth.user_id);
            Err(ApiError::unauthorized("Token is not valid"))
        }
    }
}

/// Exchange email and password for a token
#[utoipa::path(
    post,
    path = "/api/auth",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted, token issued", body = TokenResponse),
        (status = 400, description = "Invalid input or credentials", body = ValidationErrorResponse),
        (status = 500, description = "Server error", body = String)
    )
)]
#[instrument(skip(state, request))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    trace!("Entering login function");
    let email = request.email.trim().to_lowercase();

    let Some(user_model) = user::Entity::find()
        .filter(user::Column::Email.eq(email.as_str()))
        .one(&state.db)
        .await?
    else {
        warn!("Login attempt for unknown email {}", email);
        return Err(ApiError::field("email", INVALID_CREDENTIALS));
    };

    if !verify_password(&request.password, &user_model.password_hash).await? {
        warn!("Login attempt with wrong password for user {}", user_model.id);
        return Err(ApiError::field("password", INVALID_CREDENTIALS));
    }

    let token = state.tokens.issue(user_model.id)?;
    info!("User {} logged in", user_model.id);
    Ok(Json(TokenResponse { token }))
}
