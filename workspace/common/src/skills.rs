use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::ValidationError;

/// Skills as clients send them: either a ready list or one comma-separated string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(untagged)]
pub enum Skills {
    List(Vec<String>),
    Csv(String),
}

impl Default for Skills {
    fn default() -> Self {
        Skills::Csv(String::new())
    }
}

impl Skills {
    /// Trimmed, non-empty skill names in the order given.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            Skills::List(items) => clean(items.iter().map(String::as_str)),
            Skills::Csv(raw) => normalize_skills(raw),
        }
    }
}

/// Splits a comma-separated skill string into a list.
///
/// `"Rust, SQL ,,Go"` becomes `["Rust", "SQL", "Go"]`.
pub fn normalize_skills(raw: &str) -> Vec<String> {
    clean(raw.split(','))
}

fn clean<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    items
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rejects skills that normalize to nothing.
pub fn validate_skills(skills: &Skills) -> Result<(), ValidationError> {
    if skills.normalize().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("Skills are required")));
    }
    Ok(())
}
