use log::{info, warn};

use crate::api::codeforces_client::{CodeforcesClient, USER_RATING, USER_STATUS};
use crate::domain::{History, LoadResult, RatingChange, Submission};
use crate::errors::ApiError;
use crate::http::Transport;

/// Fetch rating and submission history concurrently. Never fails.
///
/// The pair is all-or-nothing: if either resource fails, both come back
/// empty and the reason is logged.
pub async fn load_history<T: Transport>(
    client: &CodeforcesClient<T>,
    username: &str,
) -> LoadResult<History> {
    let (ratings, submissions) = tokio::join!(
        fetch_ratings(client, username),
        fetch_submissions(client, username)
    );

    match (ratings, submissions) {
        (Ok(ratings), Ok(submissions)) => {
            info!(
                "  → {} contests, {} submissions for {}",
                ratings.len(),
                submissions.len(),
                username
            );
            LoadResult::Loaded {
                data: History {
                    ratings,
                    submissions,
                },
            }
        }
        (Err(reason), _) | (_, Err(reason)) => {
            warn!("Some data could not be loaded for {}: {}", username, reason);
            LoadResult::Empty { reason }
        }
    }
}

async fn fetch_ratings<T: Transport>(
    client: &CodeforcesClient<T>,
    username: &str,
) -> Result<Vec<RatingChange>, String> {
    let envelope = client.fetch_rating_history(username).await.map_err(describe)?;
    envelope.into_result(USER_RATING).map_err(|e| e.to_string())
}

async fn fetch_submissions<T: Transport>(
    client: &CodeforcesClient<T>,
    username: &str,
) -> Result<Vec<Submission>, String> {
    let envelope = client.fetch_submissions(username).await.map_err(describe)?;
    envelope.into_result(USER_STATUS).map_err(|e| e.to_string())
}

fn describe(error: ApiError) -> String {
    error.to_string()
}
