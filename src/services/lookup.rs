use log::info;

use super::history::load_history;
use super::profile::load_profile;
use crate::api::CodeforcesClient;
use crate::domain::{History, LoadResult, UserProfile};
use crate::errors::ProfileError;
use crate::http::Transport;
use crate::stats::{self, Aggregates, SummaryMetrics};

/// Everything held for one settled lookup
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub username: String,
    pub profile: UserProfile,
    pub history: LoadResult<History>,
    pub aggregates: Aggregates,
}

impl Snapshot {
    /// Recompute the summary from the data already held
    pub fn recompute_summary(&self) -> SummaryMetrics {
        let empty = History::empty();
        let history = self.history.data().unwrap_or(&empty);
        stats::summarize(self.profile.rating, history)
    }
}

/// Profile, then history, then aggregation
pub async fn run_lookup<T: Transport>(
    client: &CodeforcesClient<T>,
    username: &str,
) -> Result<Snapshot, ProfileError> {
    info!("=== Looking up {} ===", username);

    let profile = load_profile(client, username).await?;
    info!("  → Profile loaded: {}", profile.handle);

    let history = load_history(client, username).await;
    let aggregates = aggregate_history(&profile, &history);
    info!("=== Lookup for {} complete ===", username);

    Ok(Snapshot {
        username: username.to_string(),
        profile,
        history,
        aggregates,
    })
}

fn aggregate_history(profile: &UserProfile, history: &LoadResult<History>) -> Aggregates {
    match history.data() {
        Some(data) => stats::aggregate(profile, data),
        None => stats::aggregate(profile, &History::empty()),
    }
}
