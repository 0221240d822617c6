use common::ProfileResponse;
use crate::api_client::{self, ClientError};

/// Get the current user's profile
pub async fn get_current_profile() -> Result<ProfileResponse, ClientError> {
    log::trace!("Fetching current profile");
    let result: Result<ProfileResponse, ClientError> = api_client::get("/profile/me").await;
    match &result {
        Ok(profile) => log::info!("Fetched profile {}", profile.id),
        Err(e) => log::debug!("No current profile: {}", e),
    }
    result
}
