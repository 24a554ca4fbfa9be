use log::info;

use crate::api::codeforces_client::{CodeforcesClient, USER_INFO};
use crate::domain::UserProfile;
use crate::errors::ProfileError;
use crate::http::Transport;

const USER_NOT_FOUND: &str = "User not found";

/// Fetch the profile for one handle; any failure here ends the lookup
pub async fn load_profile<T: Transport>(
    client: &CodeforcesClient<T>,
    username: &str,
) -> Result<UserProfile, ProfileError> {
    info!("Loading profile for {}", username);

    let envelope = client.fetch_user_info(username).await?;
    let profiles = envelope
        .into_result(USER_INFO)
        .map_err(|rejection| rejection_message(rejection.comment))?;

    first_profile(profiles)
}

fn rejection_message(comment: Option<String>) -> ProfileError {
    let message = comment
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| USER_NOT_FOUND.to_string());
    ProfileError::Upstream(message)
}

fn first_profile(profiles: Vec<UserProfile>) -> Result<UserProfile, ProfileError> {
    profiles
        .into_iter()
        .next()
        .ok_or_else(|| ProfileError::Upstream(USER_NOT_FOUND.to_string()))
}
