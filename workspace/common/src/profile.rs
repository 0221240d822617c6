use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::skills::{Skills, validate_skills};
use crate::text::{blank_date_as_none, not_blank};

/// Request body for creating or updating the caller's profile.
///
/// Optional fields left out of an update keep their stored value. Social
/// handles are the exception: they are always replaced, and blank ones are
/// cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct UpsertProfileRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Status is required"))]
    pub status: String,
    #[serde(default)]
    #[validate(custom(function = "validate_skills"))]
    pub skills: Skills,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[serde(alias = "githubusername")]
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl UpsertProfileRequest {
    /// Social handles with blank values turned into `None`.
    pub fn social_links(&self) -> SocialLinks {
        fn present(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|handle| !handle.is_empty())
                .map(str::to_string)
        }

        SocialLinks {
            youtube: present(&self.youtube),
            twitter: present(&self.twitter),
            facebook: present(&self.facebook),
            linkedin: present(&self.linkedin),
            instagram: present(&self.instagram),
        }
    }
}

/// Request body for adding a work-history entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate, PartialEq)]
pub struct AddExperienceRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Company is required"))]
    pub company: String,
    /// Start date (YYYY-MM-DD); blank counts as missing
    #[serde(default, deserialize_with = "blank_date_as_none")]
    #[validate(required(message = "From date is required"))]
    pub from: Option<NaiveDate>,
    pub location: Option<String>,
    /// End date (YYYY-MM-DD); blank for an ongoing position
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Social media handles of a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SocialLinks {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

/// The subset of the owning user embedded in every profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProfileUser {
    pub id: i32,
    pub name: String,
    pub avatar: Option<String>,
}

/// One work-history entry, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ExperienceResponse {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// A profile with its user populated and experience listed newest first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProfileResponse {
    pub id: i32,
    pub user: ProfileUser,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<ExperienceResponse>,
    pub created_at: DateTime<Utc>,
}
