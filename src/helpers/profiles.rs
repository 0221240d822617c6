//! Assembles [`ProfileResponse`]s: a profile row plus its user's public
//! fields and its experience entries, newest first.

use common::{ExperienceResponse, ProfileResponse, ProfileUser, SocialLinks};
use model::entities::{experience, profile, user};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Converts a stored experience entry into its transport form.
pub fn experience_response(model: experience::Model) -> ExperienceResponse {
    ExperienceResponse {
        id: model.id,
        title: model.title,
        company: model.company,
        location: model.location,
        from: model.from_date,
        to: model.to_date,
        current: model.current,
        description: model.description,
    }
}

/// Joins a profile with its owner and experience entries.
pub fn profile_response(
    profile: profile::Model,
    owner: &user::Model,
    experience: Vec<experience::Model>,
) -> ProfileResponse {
    let skills = profile.skill_list();
    ProfileResponse {
        id: profile.id,
        user: ProfileUser {
            id: owner.id,
            name: owner.name.clone(),
            avatar: owner.avatar.clone(),
        },
        company: profile.company,
        website: profile.website,
        location: profile.location,
        status: profile.status,
        skills,
        bio: profile.bio,
        github_username: profile.github_username,
        social: SocialLinks {
            youtube: profile.youtube,
            twitter: profile.twitter,
            facebook: profile.facebook,
            linkedin: profile.linkedin,
            instagram: profile.instagram,
        },
        experience: experience.into_iter().map(experience_response).collect(),
        created_at: profile.created_at,
    }
}

/// Loads the full view of one profile.
pub async fn load_profile<C: ConnectionTrait>(db: &C, profile: profile::Model) -> Result<ProfileResponse, DbErr> {
    trace!("Loading owner and experience for profile {}", profile.id);
    let owner = user::Entity::find_by_id(profile.user_id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("user {} of profile {}", profile.user_id, profile.id)))?;

    let experience = experience::Entity::find()
        .filter(experience::Column::ProfileId.eq(profile.id))
        .order_by_desc(experience::Column::Id)
        .all(db)
        .await?;

    Ok(profile_response(profile, &owner, experience))
}

/// Loads the full view of the profile owned by `user_id`, if there is one.
pub async fn find_profile_by_user<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<Option<ProfileResponse>, DbErr> {
    match profile::Entity::find()
        .filter(profile::Column::UserId.eq(user_id))
        .one(db)
        .await?
    {
        Some(profile) => Ok(Some(load_profile(db, profile).await?)),
        None => Ok(None),
    }
}

/// Loads every profile with owners and experience, in three queries total.
pub async fn load_all_profiles<C: ConnectionTrait>(db: &C) -> Result<Vec<ProfileResponse>, DbErr> {
    let rows = profile::Entity::find()
        .find_also_related(user::Entity)
        .order_by_asc(profile::Column::Id)
        .all(db)
        .await?;
    debug!("Fetched {} profiles", rows.len());

    let profile_ids: Vec<i32> = rows.iter().map(|(profile, _)| profile.id).collect();
    let mut experience_by_profile: HashMap<i32, Vec<experience::Model>> = HashMap::new();
    if !profile_ids.is_empty() {
        let entries = experience::Entity::find()
            .filter(experience::Column::ProfileId.is_in(profile_ids))
            .order_by_desc(experience::Column::Id)
            .all(db)
            .await?;
        for entry in entries {
            experience_by_profile.entry(entry.profile_id).or_default().push(entry);
        }
    }

    rows.into_iter()
        .map(|(profile, owner)| {
            let owner = owner.ok_or_else(|| {
                DbErr::RecordNotFound(format!("user {} of profile {}", profile.user_id, profile.id))
            })?;
            let experience = experience_by_profile.remove(&profile.id).unwrap_or_default();
            Ok(profile_response(profile, &owner, experience))
        })
        .collect()
}
