use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Verdict string the upstream assigns to accepted submissions
pub const ACCEPTED_VERDICT: &str = "OK";

/// Label used for submissions still waiting for a verdict
pub const PENDING_VERDICT: &str = "TESTING";

/// Public profile of one handle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub handle: String,
    pub rating: Option<i32>,
    pub max_rating: Option<i32>,
    pub rank: Option<String>,
    pub max_rank: Option<String>,
    pub country: Option<String>,
    pub organization: Option<String>,
}

impl UserProfile {
    /// First letter of the handle, upper-cased, for avatar placeholders
    pub fn avatar_initial(&self) -> Option<char> {
        self.handle.chars().next().map(|c| c.to_ascii_uppercase())
    }
}

/// Result of one rated contest, in chronological order upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingChange {
    pub contest_id: i64,
    #[serde(default)]
    pub contest_name: String,
    #[serde(default)]
    pub rank: i64,
    #[serde(default)]
    pub rating_update_time_seconds: i64,
    #[serde(default)]
    pub old_rating: i32,
    pub new_rating: i32,
}

impl RatingChange {
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.rating_update_time_seconds, 0)
    }

    pub fn delta(&self) -> i32 {
        self.new_rating - self.old_rating
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub contest_id: Option<i64>,
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub name: String,
    pub rating: Option<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    #[serde(default)]
    pub creation_time_seconds: i64,
    pub verdict: Option<String>,
    pub problem: Problem,
}

impl Submission {
    pub fn verdict_label(&self) -> &str {
        self.verdict.as_deref().unwrap_or(PENDING_VERDICT)
    }

    pub fn is_accepted(&self) -> bool {
        self.verdict.as_deref() == Some(ACCEPTED_VERDICT)
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.creation_time_seconds, 0)
    }
}

/// Rating and submission history loaded together for one handle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    pub ratings: Vec<RatingChange>,
    pub submissions: Vec<Submission>,
}

impl History {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty() && self.submissions.is_empty()
    }
}
