use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::{Problem, RatingChange, Submission};
use crate::errors::FetchError;
use crate::http::{HttpResponse, Transport};

/// One scripted outcome for a request
#[derive(Debug, Clone)]
pub enum Reply {
    Respond { status: u16, body: String },
    Delayed { delay: Duration, body: String },
    NetworkError,
    Hang,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Reply::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Reply::Respond {
            status,
            body: body.to_string(),
        }
    }

    pub fn delayed(millis: u64, body: &str) -> Self {
        Reply::Delayed {
            delay: Duration::from_millis(millis),
            body: body.to_string(),
        }
    }
}

#[derive(Default)]
struct Route {
    replies: Vec<Reply>,
    attempts: usize,
}

/// In-memory transport matching routes by URL substring.
///
/// The longest matching fragment wins, so `handles=alice` can override a
/// general `user.info` route.
/// Each route plays its replies in order and repeats the last one once the
/// script runs out.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    routes: Arc<Mutex<HashMap<&'static str, Route>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, fragment: &'static str, replies: Vec<Reply>) -> Self {
        self.routes.lock().unwrap().insert(
            fragment,
            Route {
                replies,
                attempts: 0,
            },
        );
        self
    }

    pub fn attempts(&self, fragment: &str) -> usize {
        self.routes
            .lock()
            .unwrap()
            .get(fragment)
            .map(|route| route.attempts)
            .unwrap_or(0)
    }

    pub fn total_attempts(&self) -> usize {
        self.routes.lock().unwrap().values().map(|r| r.attempts).sum()
    }

    fn next_reply(&self, url: &str) -> Option<Reply> {
        let mut routes = self.routes.lock().unwrap();
        let route = routes
            .iter_mut()
            .filter(|(fragment, _)| url.contains(**fragment))
            .max_by_key(|(fragment, _)| fragment.len())
            .map(|(_, route)| route)?;

        let index = route.attempts.min(route.replies.len().saturating_sub(1));
        route.attempts += 1;
        route.replies.get(index).cloned()
    }
}

fn respond(status: u16, body: String) -> HttpResponse {
    let status_text = StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or_default()
        .to_string();
    HttpResponse {
        status,
        status_text,
        body,
    }
}

impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        match self.next_reply(url) {
            Some(Reply::Respond { status, body }) => Ok(respond(status, body)),
            Some(Reply::Delayed { delay, body }) => {
                tokio::time::sleep(delay).await;
                Ok(respond(200, body))
            }
            Some(Reply::NetworkError) => Err(FetchError::Transport("connection refused".to_string())),
            Some(Reply::Hang) => std::future::pending().await,
            None => Ok(respond(404, String::new())),
        }
    }
}

pub const TOURIST_INFO: &str = r#"{"status":"OK","result":[{"handle":"tourist","rating":3800,"maxRating":4009,"rank":"legendary grandmaster","maxRank":"legendary grandmaster","country":"Belarus"}]}"#;

pub const TOURIST_RATINGS: &str = r#"{"status":"OK","result":[
    {"contestId":1,"contestName":"Round 1","handle":"tourist","rank":1,"ratingUpdateTimeSeconds":1266588000,"oldRating":0,"newRating":1602},
    {"contestId":2,"contestName":"Round 2","handle":"tourist","rank":3,"ratingUpdateTimeSeconds":1267124400,"oldRating":1602,"newRating":1764},
    {"contestId":3,"contestName":"Round 3","handle":"tourist","rank":2,"ratingUpdateTimeSeconds":1268022000,"oldRating":1764,"newRating":1878}
]}"#;

pub const TOURIST_SUBMISSIONS: &str = r#"{"status":"OK","result":[
    {"id":3,"contestId":100,"creationTimeSeconds":1700000300,"verdict":"OK","problem":{"contestId":100,"index":"C","name":"Gamma","rating":1290,"tags":["dp","math"]}},
    {"id":2,"contestId":100,"creationTimeSeconds":1700000200,"verdict":"WRONG_ANSWER","problem":{"contestId":100,"index":"B","name":"Beta","rating":1300,"tags":["greedy"]}},
    {"id":1,"contestId":100,"creationTimeSeconds":1700000100,"verdict":"OK","problem":{"contestId":100,"index":"A","name":"Alpha","rating":1250,"tags":["math"]}}
]}"#;

pub const NOT_FOUND: &str =
    r#"{"status":"FAILED","comment":"handles: User with handle ghost not found"}"#;

/// Transport answering all three resources for `tourist`
pub fn tourist_transport() -> ScriptedTransport {
    ScriptedTransport::new()
        .route("user.info", vec![Reply::ok(TOURIST_INFO)])
        .route("user.rating", vec![Reply::ok(TOURIST_RATINGS)])
        .route("user.status", vec![Reply::ok(TOURIST_SUBMISSIONS)])
}

pub fn submission(verdict: &str, rating: Option<i32>, tags: &[&str]) -> Submission {
    Submission {
        id: 0,
        creation_time_seconds: 0,
        verdict: Some(verdict.to_string()),
        problem: Problem {
            contest_id: Some(1),
            index: "A".to_string(),
            name: "Problem".to_string(),
            rating,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        },
    }
}

pub fn rating_change(new_rating: i32) -> RatingChange {
    RatingChange {
        contest_id: 1,
        contest_name: "Round".to_string(),
        rank: 1,
        rating_update_time_seconds: 0,
        old_rating: 0,
        new_rating,
    }
}
