use anyhow::Result;
use log::{debug, info, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::time::sleep;

use super::lookup::{Snapshot, run_lookup};
use crate::api::CodeforcesClient;
use crate::config::{AnalysisSettings, AppConfig};
use crate::domain::{History, LoadResult, UserProfile, validate_username};
use crate::errors::{ProfileError, ValidationError};
use crate::http::{ReqwestTransport, Transport};
use crate::stats::{Aggregates, SummaryMetrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Loading { username: String },
    Ready(Box<Snapshot>),
    Failed { username: String, message: String },
}

impl SessionState {
    pub fn phase(&self) -> Phase {
        match self {
            SessionState::Idle => Phase::Idle,
            SessionState::Loading { .. } => Phase::Loading,
            SessionState::Ready(_) => Phase::Ready,
            SessionState::Failed { .. } => Phase::Failed,
        }
    }
}

/// Notifications for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Loading { username: String },
    Ready { profile: UserProfile, aggregates: Aggregates },
    Failed { username: String, message: String },
    AnalysisReady { summary: SummaryMetrics },
}

/// How one lookup request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Ready,
    Failed { message: String },
    /// A newer lookup started before this one settled; its result was dropped
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LookupTag {
    id: u64,
    username: String,
}

struct Inner {
    state: SessionState,
    active: Option<LookupTag>,
    next_id: u64,
    analysis: Option<SummaryMetrics>,
    subscribers: Vec<UnboundedSender<SessionEvent>>,
}

impl Inner {
    fn emit(&mut self, event: SessionEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn is_active(&self, tag: &LookupTag) -> bool {
        self.active.as_ref() == Some(tag)
    }
}

/// Owns the active handle and the latest snapshot.
///
/// Idle → Loading → {Ready, Failed}. Ready and Failed both accept a new
/// lookup, which throws away everything held before.
pub struct Session<T> {
    client: Arc<CodeforcesClient<T>>,
    analysis_delay: Duration,
    inner: Mutex<Inner>,
}

impl Session<ReqwestTransport> {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = CodeforcesClient::from_settings(&config.api)?;
        Ok(Self::new(Arc::new(client), &config.analysis))
    }
}

impl<T: Transport> Session<T> {
    pub fn new(client: Arc<CodeforcesClient<T>>, analysis: &AnalysisSettings) -> Self {
        Self {
            client,
            analysis_delay: analysis.delay(),
            inner: Mutex::new(Inner {
                state: SessionState::Idle,
                active: None,
                next_id: 0,
                analysis: None,
                subscribers: Vec::new(),
            }),
        }
    }

    pub fn subscribe(&self) -> UnboundedReceiver<SessionEvent> {
        let (tx, rx) = unbounded_channel();
        self.lock().subscribers.push(tx);
        rx
    }

    pub fn state(&self) -> SessionState {
        self.lock().state.clone()
    }

    pub fn phase(&self) -> Phase {
        self.lock().state.phase()
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        match &self.lock().state {
            SessionState::Ready(snapshot) => Some(snapshot.as_ref().clone()),
            _ => None,
        }
    }

    /// History of the settled lookup; `NotAttempted` until a lookup is Ready
    pub fn history(&self) -> LoadResult<History> {
        match &self.lock().state {
            SessionState::Ready(snapshot) => snapshot.history.clone(),
            _ => LoadResult::NotAttempted,
        }
    }

    /// Latest analysis result for the current snapshot
    pub fn analysis(&self) -> Option<SummaryMetrics> {
        self.lock().analysis.clone()
    }

    /// Validate the handle, enter Loading and run the full lookup.
    ///
    /// Invalid input is rejected without touching state or the network.
    pub async fn request_lookup(&self, input: &str) -> Result<LookupOutcome, ValidationError> {
        let username = validate_username(input)?;
        let tag = self.begin(username);

        let result = run_lookup(&self.client, &tag.username).await;
        Ok(self.settle(tag, result))
    }

    /// Re-issue the failed lookup for the same handle; `None` unless Failed
    pub async fn request_retry(&self) -> Option<LookupOutcome> {
        let username = match &self.lock().state {
            SessionState::Failed { username, .. } => username.clone(),
            _ => return None,
        };
        self.request_lookup(&username).await.ok()
    }

    /// Recompute the summary after the analysis pause; `None` unless Ready.
    ///
    /// No fetching happens here, so it can be repeated freely.
    pub async fn request_analysis_refresh(&self) -> Option<SummaryMetrics> {
        let (tag, snapshot) = self.ready_snapshot()?;

        sleep(self.analysis_delay).await;
        let summary = snapshot.recompute_summary();

        let mut inner = self.lock();
        if !inner.is_active(&tag) {
            debug!("Dropping analysis for {}: lookup changed", tag.username);
            return None;
        }
        inner.analysis = Some(summary.clone());
        inner.emit(SessionEvent::AnalysisReady {
            summary: summary.clone(),
        });
        Some(summary)
    }

    // --- State Transitions ---

    fn begin(&self, username: String) -> LookupTag {
        let mut inner = self.lock();
        inner.next_id += 1;
        let tag = LookupTag {
            id: inner.next_id,
            username: username.clone(),
        };

        inner.active = Some(tag.clone());
        inner.analysis = None;
        inner.state = SessionState::Loading {
            username: username.clone(),
        };
        inner.emit(SessionEvent::Loading { username });
        tag
    }

    fn settle(&self, tag: LookupTag, result: Result<Snapshot, ProfileError>) -> LookupOutcome {
        let mut inner = self.lock();
        if !inner.is_active(&tag) {
            debug!("Discarding stale result for {} (lookup #{})", tag.username, tag.id);
            return LookupOutcome::Superseded;
        }

        match result {
            Ok(snapshot) => {
                info!("Lookup for {} ready", tag.username);
                inner.emit(SessionEvent::Ready {
                    profile: snapshot.profile.clone(),
                    aggregates: snapshot.aggregates.clone(),
                });
                inner.state = SessionState::Ready(Box::new(snapshot));
                LookupOutcome::Ready
            }
            Err(error) => {
                let message = error.to_string();
                warn!("Lookup for {} failed: {}", tag.username, message);
                inner.emit(SessionEvent::Failed {
                    username: tag.username.clone(),
                    message: message.clone(),
                });
                inner.state = SessionState::Failed {
                    username: tag.username,
                    message: message.clone(),
                };
                LookupOutcome::Failed { message }
            }
        }
    }

    fn ready_snapshot(&self) -> Option<(LookupTag, Snapshot)> {
        let inner = self.lock();
        let tag = inner.active.clone()?;
        match &inner.state {
            SessionState::Ready(snapshot) => Some((tag, snapshot.as_ref().clone())),
            _ => None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
