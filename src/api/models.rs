use serde::{Deserialize, Serialize};

use crate::domain::{History, LoadResult, UserProfile};
use crate::errors::UpstreamRejection;
use crate::services::lookup::Snapshot;
use crate::stats::{ChartSpec, SummaryMetrics};

const OK_STATUS: &str = "OK";

/// Common wrapper around every upstream payload
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<R> {
    pub status: String,
    pub comment: Option<String>,
    pub result: Option<R>,
}

impl<R> ApiEnvelope<R> {
    pub fn is_ok(&self) -> bool {
        self.status == OK_STATUS
    }

    /// Payload of an OK envelope; a non-OK status or missing payload is a rejection
    pub fn into_result(self, resource: &'static str) -> Result<R, UpstreamRejection> {
        match (self.is_ok(), self.result) {
            (true, Some(result)) => Ok(result),
            (_, _) => Err(UpstreamRejection {
                resource,
                status: self.status,
                comment: self.comment,
            }),
        }
    }
}

// --- Server Response Structures ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStatus {
    pub loaded: bool,
    pub reason: Option<String>,
    pub contest_count: usize,
    pub submission_count: usize,
}

impl HistoryStatus {
    pub fn from_load(history: &LoadResult<History>) -> Self {
        let data = history.data();
        Self {
            loaded: history.is_loaded(),
            reason: history.reason().map(str::to_string),
            contest_count: data.map(|h| h.ratings.len()).unwrap_or(0),
            submission_count: data.map(|h| h.submissions.len()).unwrap_or(0),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub profile: UserProfile,
    pub history: HistoryStatus,
    pub charts: Vec<ChartSpec>,
    pub summary: SummaryMetrics,
}

impl StatsResponse {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            profile: snapshot.profile.clone(),
            history: HistoryStatus::from_load(&snapshot.history),
            charts: snapshot.aggregates.charts(),
            summary: snapshot.aggregates.summary.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
}
