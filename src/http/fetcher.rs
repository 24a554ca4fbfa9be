use log::{debug, warn};
use std::time::Duration;
use tokio::time::{sleep, timeout};

use super::client::{HttpResponse, Transport};
use crate::config::ApiSettings;
use crate::errors::FetchError;

/// Attempt budget, per-attempt timeout and the fixed pause between attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    pub max_retries: u32,
    pub timeout: Duration,
    pub backoff: Duration,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            timeout: Duration::from_millis(10_000),
            backoff: Duration::from_millis(1_000),
        }
    }
}

impl From<&ApiSettings> for FetchPolicy {
    fn from(settings: &ApiSettings) -> Self {
        Self {
            max_retries: settings.max_retries,
            timeout: settings.timeout(),
            backoff: settings.backoff(),
        }
    }
}

impl FetchPolicy {
    pub fn total_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

/// The only network primitive: GET with bounded timeout and bounded retries.
///
/// Timeouts, transport failures and non-2xx statuses are all retried the same
/// way. The body is never inspected here.
pub struct ResilientFetcher<T> {
    transport: T,
    policy: FetchPolicy,
}

impl<T: Transport> ResilientFetcher<T> {
    pub fn new(transport: T, policy: FetchPolicy) -> Self {
        Self { transport, policy }
    }

    pub async fn fetch(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let total = self.policy.total_attempts();
        let mut attempt = 1;

        loop {
            let error = match self.attempt(url).await {
                Ok(response) => return Ok(response),
                Err(e) => e,
            };

            if attempt >= total {
                return Err(error);
            }

            warn!("Attempt {}/{} for {} failed: {}", attempt, total, url, error);
            sleep(self.policy.backoff).await;
            attempt += 1;
        }
    }

    // --- Helper Methods ---

    async fn attempt(&self, url: &str) -> Result<HttpResponse, FetchError> {
        debug!("GET {}", url);
        let response = match timeout(self.policy.timeout, self.transport.get(url)).await {
            Ok(result) => result?,
            Err(_) => return Err(FetchError::Timeout),
        };

        Self::check_status(response)
    }

    fn check_status(response: HttpResponse) -> Result<HttpResponse, FetchError> {
        if response.is_success() {
            return Ok(response);
        }
        Err(FetchError::Status {
            status: response.status,
            status_text: response.status_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Reply, ScriptedTransport};
    use tokio::time::Instant;

    const URL: &str = "https://example.test/api/user.info?handles=tourist";

    fn fetcher(transport: ScriptedTransport, max_retries: u32) -> ResilientFetcher<ScriptedTransport> {
        ResilientFetcher::new(
            transport,
            FetchPolicy {
                max_retries,
                ..FetchPolicy::default()
            },
        )
    }

    #[tokio::test(start_paused = true)]
    async fn always_hanging_url_uses_every_attempt_then_times_out() {
        let transport = ScriptedTransport::new().route("user.info", vec![Reply::Hang]);
        let fetcher = fetcher(transport.clone(), 2);
        let started = Instant::now();

        let result = fetcher.fetch(URL).await;

        assert_eq!(result, Err(FetchError::Timeout));
        assert_eq!(transport.attempts("user.info"), 3);
        // three 10s timeouts plus two 1s pauses
        assert_eq!(started.elapsed(), Duration::from_secs(32));
    }

    #[tokio::test(start_paused = true)]
    async fn failure_then_success_takes_two_attempts() {
        let transport = ScriptedTransport::new().route(
            "user.info",
            vec![Reply::NetworkError, Reply::ok(r#"{"status":"OK","result":[]}"#)],
        );
        let fetcher = fetcher(transport.clone(), 1);
        let started = Instant::now();

        let response = fetcher.fetch(URL).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(transport.attempts("user.info"), 2);
        assert_eq!(started.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn final_non_success_status_is_surfaced() {
        let transport = ScriptedTransport::new().route("user.info", vec![Reply::status(503, "")]);
        let fetcher = fetcher(transport.clone(), 2);

        let error = fetcher.fetch(URL).await.unwrap_err();

        assert_eq!(
            error,
            FetchError::Status {
                status: 503,
                status_text: "Service Unavailable".to_string()
            }
        );
        assert_eq!(transport.attempts("user.info"), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn success_on_first_attempt_makes_no_further_requests() {
        let transport = ScriptedTransport::new().route("user.info", vec![Reply::ok("{}")]);
        let fetcher = fetcher(transport.clone(), 2);
        let started = Instant::now();

        fetcher.fetch(URL).await.unwrap();

        assert_eq!(transport.attempts("user.info"), 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_retries_means_single_attempt() {
        let transport = ScriptedTransport::new().route("user.info", vec![Reply::NetworkError]);
        let fetcher = fetcher(transport.clone(), 0);

        let error = fetcher.fetch(URL).await.unwrap_err();

        assert!(matches!(error, FetchError::Transport(_)));
        assert_eq!(transport.attempts("user.info"), 1);
    }

    #[test]
    fn policy_follows_api_settings() {
        let policy = FetchPolicy::from(&ApiSettings::default());
        assert_eq!(policy, FetchPolicy::default());
        assert_eq!(policy.total_attempts(), 3);
    }

    #[test]
    fn attempt_count_saturates() {
        let policy = FetchPolicy {
            max_retries: u32::MAX,
            ..FetchPolicy::default()
        };
        assert_eq!(policy.total_attempts(), u32::MAX);
    }
}
