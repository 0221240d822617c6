use crate::auth::{gravatar_url, hash_password};
use crate::errors::ApiError;
use crate::extractors::ValidatedJson;
use crate::schemas::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use chrono::Utc;
use common::{RegisterRequest, TokenResponse};
use model::entities::user;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, SqlErr};
use tracing::{debug, error, info, instrument, trace, warn};

const USER_EXISTS: &str = "User already exists";

/// Register a new user
///
/// Emails are stored lowercased, so registering the same address with
/// different casing is a duplicate.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered, token issued", body = TokenResponse),
        (status = 400, description = "Invalid input or email already registered", body = ValidationErrorResponse),
        (status = 500, description = "Server error", body = String)
    )
)]
#[instrument(skip(state, request))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    trace!("Entering register_user function");
    let email = request.email.trim().to_lowercase();

    trace!("Checking whether {} is already registered", email);
    let existing = user::Entity::find()
        .filter(user::Column::Email.eq(email.as_str()))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        warn!("Registration rejected, {} already exists", email);
        return Err(ApiError::field("email", USER_EXISTS));
    }

    let new_user = user::ActiveModel {
        name: Set(request.name.trim().to_string()),
        email: Set(email.clone()),
        password_hash: Set(hash_password(&request.password).await?),
        avatar: Set(Some(gravatar_url(&email))),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    trace!("Attempting to insert new user into database");
    let user_model = match new_user.insert(&state.db).await {
        Ok(user_model) => user_model,
        // A concurrent registration won the race past the lookup above
        Err(db_error) if matches!(db_error.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            warn!("Registration of {} lost a race on the unique email index", email);
            return Err(ApiError::field("email", USER_EXISTS));
        }
        Err(db_error) => {
            error!("Failed to create user '{}': {}", email, db_error);
            return Err(db_error.into());
        }
    };

    debug!("Issuing token for new user {}", user_model.id);
    let token = state.tokens.issue(user_model.id)?;
    info!("User registered with ID: {}, email: {}", user_model.id, user_model.email);
    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}
