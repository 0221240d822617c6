//! Common transport-layer types shared between backend and frontend.
//! These structs are the exact request/response payloads of the HTTP API,
//! so the frontend can deserialize responses without duplicating shapes.

mod auth;
mod errors;
mod profile;
mod skills;
mod text;

pub use auth::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
pub use errors::{FieldError, MessageResponse, ValidationErrorResponse};
pub use profile::{
    AddExperienceRequest, ExperienceResponse, ProfileResponse, ProfileUser, SocialLinks,
    UpsertProfileRequest,
};
pub use skills::{Skills, normalize_skills, validate_skills};
pub use text::{blank_date_as_none, not_blank};
