use crate::auth::AuthUser;
use crate::errors::ApiError;
use crate::extractors::ValidatedJson;
use crate::helpers::profiles::{find_profile_by_user, load_all_profiles, load_profile};
use crate::schemas::AppState;
use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::Utc;
use common::{AddExperienceRequest, MessageResponse, ProfileResponse, UpsertProfileRequest};
use model::entities::{experience, profile, user};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait,
    sea_query::OnConflict,
};
use tracing::{debug, info, instrument, trace, warn};

const NO_PROFILE: &str = "There is no profile for this user";
const PROFILE_NOT_FOUND: &str = "Profile not found";
const EXPERIENCE_NOT_FOUND: &str = "Experience not found";

/// Get the caller's profile
#[utoipa::path(
    get,
    path = "/api/profile/me",
    tag = "profile",
    responses(
        (status = 200, description = "Profile of the current user", body = ProfileResponse),
        (status = 400, description = "The user has no profile yet", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = String)
    )
)]
#[instrument(skip(state))]
pub async fn get_my_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ApiError> {
    trace!("Entering get_my_profile function for user_id: {}", auth.user_id);

    match find_profile_by_user(&state.db, auth.user_id).await? {
        Some(profile) => {
            info!("Retrieved profile {} for user {}", profile.id, auth.user_id);
            Ok(Json(profile))
        }
        None => {
            warn!("User {} has no profile", auth.user_id);
            Err(ApiError::bad_request(NO_PROFILE))
        }
    }
}

/// Create or update the caller's profile
///
/// Written as a single insert-or-update keyed on the unique `user_id`, so
/// concurrent first writes still leave exactly one profile.
#[utoipa::path(
    post,
    path = "/api/profile",
    tag = "profile",
    request_body = UpsertProfileRequest,
    responses(
        (status = 200, description = "Profile created or updated", body = ProfileResponse),
        (status = 400, description = "Status or skills missing", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = String)
    )
)]
#[instrument(skip(state, request))]
pub async fn upsert_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpsertProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    trace!("Entering upsert_profile function for user_id: {}", auth.user_id);

    let skills = request.skills.normalize();
    let social = request.social_links();
    debug!("Saving profile with status '{}' and {} skills", request.status, skills.len());

    let mut new_profile = profile::ActiveModel {
        user_id: Set(auth.user_id),
        status: Set(request.status.trim().to_string()),
        skills: Set(profile::skills_to_json(&skills)),
        youtube: Set(social.youtube),
        twitter: Set(social.twitter),
        facebook: Set(social.facebook),
        linkedin: Set(social.linkedin),
        instagram: Set(social.instagram),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    // Required fields and social handles are always overwritten
    let mut update_columns = vec![
        profile::Column::Status,
        profile::Column::Skills,
        profile::Column::Youtube,
        profile::Column::Twitter,
        profile::Column::Facebook,
        profile::Column::Linkedin,
        profile::Column::Instagram,
    ];

    // Optional fields only when the request carries them; blank clears the field
    let optional_fields = [
        (profile::Column::Company, request.company),
        (profile::Column::Website, request.website),
        (profile::Column::Location, request.location),
        (profile::Column::Bio, request.bio),
        (profile::Column::GithubUsername, request.github_username),
    ];
    let mut updated_fields = Vec::new();
    for (column, value) in optional_fields {
        if let Some(value) = value {
            let value = Some(value.trim().to_string()).filter(|v| !v.is_empty());
            new_profile.set(column, value.into());
            update_columns.push(column);
            updated_fields.push(format!("{:?}", column));
        }
    }
    if !updated_fields.is_empty() {
        debug!("Optional fields provided: {}", updated_fields.join(", "));
    }

    trace!("Attempting to upsert profile for user {}", auth.user_id);
    profile::Entity::insert(new_profile)
        .on_conflict(
            OnConflict::column(profile::Column::UserId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_without_returning(&state.db)
        .await?;

    let saved = find_profile_by_user(&state.db, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("profile of user {} vanished after upsert", auth.user_id)))?;

    info!("Profile {} saved for user {}", saved.id, auth.user_id);
    Ok(Json(saved))
}

/// Get all profiles
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "All profiles", body = Vec<ProfileResponse>),
        (status = 500, description = "Server error", body = String)
    )
)]
#[instrument(skip(state))]
pub async fn get_profiles(State(state): State<AppState>) -> Result<Json<Vec<ProfileResponse>>, ApiError> {
    trace!("Entering get_profiles function");

    let profiles = load_all_profiles(&state.db).await?;
    info!("Successfully retrieved {} profiles", profiles.len());
    Ok(Json(profiles))
}

/// Get the profile of a user
///
/// A malformed id is reported exactly like a missing profile.
#[utoipa::path(
    get,
    path = "/api/profile/user/{user_id}",
    tag = "profile",
    params(
        ("user_id" = String, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Profile of the user", body = ProfileResponse),
        (status = 400, description = "Profile not found or malformed id", body = MessageResponse),
        (status = 500, description = "Server error", body = String)
    )
)]
#[instrument(skip(state))]
pub async fn get_profile_by_user_id(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ApiError> {
    trace!("Entering get_profile_by_user_id function for user_id: {}", user_id);

    let Ok(user_id) = user_id.parse::<i32>() else {
        warn!("Malformed user id '{}'", user_id);
        return Err(ApiError::bad_request(PROFILE_NOT_FOUND));
    };

    match find_profile_by_user(&state.db, user_id).await? {
        Some(profile) => {
            info!("Retrieved profile {} for user {}", profile.id, user_id);
            Ok(Json(profile))
        }
        None => {
            warn!("No profile for user {}", user_id);
            Err(ApiError::bad_request(PROFILE_NOT_FOUND))
        }
    }
}

/// Delete the caller's profile, experience and account
#[utoipa::path(
    delete,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Account deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = String)
    )
)]
#[instrument(skip(state))]
pub async fn delete_account(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    trace!("Entering delete_account function for user_id: {}", auth.user_id);

    let txn = state.db.begin().await?;

    if let Some(existing) = profile::Entity::find()
        .filter(profile::Column::UserId.eq(auth.user_id))
        .one(&txn)
        .await?
    {
        let removed = experience::Entity::delete_many()
            .filter(experience::Column::ProfileId.eq(existing.id))
            .exec(&txn)
            .await?;
        debug!("Removed {} experience entries of profile {}", removed.rows_affected, existing.id);

        profile::Entity::delete_by_id(existing.id).exec(&txn).await?;
        debug!("Removed profile {}", existing.id);
    }

    let removed = user::Entity::delete_by_id(auth.user_id).exec(&txn).await?;
    txn.commit().await?;

    if removed.rows_affected == 0 {
        warn!("User {} was already gone", auth.user_id);
    }
    info!("User {} deleted", auth.user_id);
    Ok(Json(MessageResponse::new("User deleted")))
}

/// Add an experience entry to the front of the caller's list
#[utoipa::path(
    put,
    path = "/api/profile/experience",
    tag = "profile",
    request_body = AddExperienceRequest,
    responses(
        (status = 200, description = "Updated profile", body = ProfileResponse),
        (status = 400, description = "Missing fields or no profile", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = String)
    )
)]
#[instrument(skip(state, request))]
pub async fn add_experience(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AddExperienceRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    trace!("Entering add_experience function for user_id: {}", auth.user_id);

    let Some(existing) = profile::Entity::find()
        .filter(profile::Column::UserId.eq(auth.user_id))
        .one(&state.db)
        .await?
    else {
        warn!("User {} tried to add experience without a profile", auth.user_id);
        return Err(ApiError::bad_request(NO_PROFILE));
    };

    // Guaranteed by validation
    let from_date = request
        .from
        .ok_or_else(|| ApiError::field("from", "From date is required"))?;

    let entry = experience::ActiveModel {
        profile_id: Set(existing.id),
        title: Set(request.title.trim().to_string()),
        company: Set(request.company.trim().to_string()),
        location: Set(request.location),
        from_date: Set(from_date),
        to_date: Set(request.to),
        current: Set(request.current),
        description: Set(request.description),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;
    debug!("Inserted experience {} for profile {}", entry.id, existing.id);

    let updated = load_profile(&state.db, existing).await?;
    info!("Experience '{}' added to profile {}", entry.title, updated.id);
    Ok(Json(updated))
}

/// Remove one of the caller's experience entries
#[utoipa::path(
    delete,
    path = "/api/profile/experience/{exp_id}",
    tag = "profile",
    params(
        ("exp_id" = String, Path, description = "Experience entry ID"),
    ),
    responses(
        (status = 200, description = "Updated profile", body = ProfileResponse),
        (status = 400, description = "No such entry or no profile", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 500, description = "Server error", body = String)
    )
)]
#[instrument(skip(state))]
pub async fn delete_experience(
    auth: AuthUser,
    Path(exp_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ApiError> {
    trace!("Entering delete_experience function for exp_id: {}", exp_id);

    let Ok(exp_id) = exp_id.parse::<i32>() else {
        warn!("Malformed experience id '{}'", exp_id);
        return Err(ApiError::bad_request(EXPERIENCE_NOT_FOUND));
    };

    let Some(existing) = profile::Entity::find()
        .filter(profile::Column::UserId.eq(auth.user_id))
        .one(&state.db)
        .await?
    else {
        return Err(ApiError::bad_request(NO_PROFILE));
    };

    // Scoped to the caller's profile so nobody can delete someone else's entry
    let removed = experience::Entity::delete_many()
        .filter(experience::Column::Id.eq(exp_id))
        .filter(experience::Column::ProfileId.eq(existing.id))
        .exec(&state.db)
        .await?;
    if removed.rows_affected == 0 {
        warn!("Experience {} not found in profile {}", exp_id, existing.id);
        return Err(ApiError::bad_request(EXPERIENCE_NOT_FOUND));
    }

    let updated = load_profile(&state.db, existing).await?;
    info!("Experience {} removed from profile {}", exp_id, updated.id);
    Ok(Json(updated))
}
