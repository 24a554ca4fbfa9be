use anyhow::Result;
use serde::de::DeserializeOwned;

use crate::api::models::ApiEnvelope;
use crate::config::ApiSettings;
use crate::domain::{RatingChange, Submission, UserProfile};
use crate::errors::ApiError;
use crate::http::{FetchPolicy, ReqwestTransport, ResilientFetcher, Transport};

pub const USER_INFO: &str = "user.info";
pub const USER_RATING: &str = "user.rating";
pub const USER_STATUS: &str = "user.status";

/// Read-only client for the three per-user resources
pub struct CodeforcesClient<T> {
    fetcher: ResilientFetcher<T>,
    base_url: String,
}

impl CodeforcesClient<ReqwestTransport> {
    pub fn from_settings(settings: &ApiSettings) -> Result<Self> {
        let transport = ReqwestTransport::new(settings.user_agent)?;
        let fetcher = ResilientFetcher::new(transport, FetchPolicy::from(settings));
        Ok(Self::new(fetcher, &settings.base_url))
    }
}

impl<T: Transport> CodeforcesClient<T> {
    pub fn new(fetcher: ResilientFetcher<T>, base_url: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_user_info(
        &self,
        handle: &str,
    ) -> Result<ApiEnvelope<Vec<UserProfile>>, ApiError> {
        let url = self.build_url(USER_INFO, "handles", handle);
        self.fetch_envelope(&url, USER_INFO).await
    }

    pub async fn fetch_rating_history(
        &self,
        handle: &str,
    ) -> Result<ApiEnvelope<Vec<RatingChange>>, ApiError> {
        let url = self.build_url(USER_RATING, "handle", handle);
        self.fetch_envelope(&url, USER_RATING).await
    }

    pub async fn fetch_submissions(
        &self,
        handle: &str,
    ) -> Result<ApiEnvelope<Vec<Submission>>, ApiError> {
        let url = self.build_url(USER_STATUS, "handle", handle);
        self.fetch_envelope(&url, USER_STATUS).await
    }

    // --- Helper Methods ---

    fn build_url(&self, resource: &str, param: &str, handle: &str) -> String {
        format!("{}/{}?{}={}", self.base_url, resource, param, handle)
    }

    async fn fetch_envelope<R: DeserializeOwned>(
        &self,
        url: &str,
        resource: &'static str,
    ) -> Result<ApiEnvelope<R>, ApiError> {
        let response = self.fetcher.fetch(url).await?;
        Self::parse_envelope(&response.body, resource)
    }

    fn parse_envelope<R: DeserializeOwned>(
        body: &str,
        resource: &'static str,
    ) -> Result<ApiEnvelope<R>, ApiError> {
        serde_json::from_str(body).map_err(|source| ApiError::Decode { resource, source })
    }
}
