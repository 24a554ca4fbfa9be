use std::time::Duration;

const BASE_URL_ENV: &str = "CF_API_BASE_URL";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub backoff_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://codeforces.com/api".to_string(),
            user_agent: "CfProfileStats/1.0",
            timeout_ms: 10_000,
            max_retries: 2,
            backoff_ms: 1_000,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    /// Pause before the analysis panel is refreshed
    pub delay_ms: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self { delay_ms: 1_500 }
    }
}

impl AnalysisSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub analysis: AnalysisSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::default(),
            analysis: AnalysisSettings::default(),
        }
    }

    /// Defaults overlaid with environment overrides
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.api.base_url = trim_trailing_slash(&base_url);
        }
        config
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api.base_url = trim_trailing_slash(base_url);
        self
    }
}

fn trim_trailing_slash(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fetch_policy() {
        let config = AppConfig::new();
        assert_eq!(config.api.max_retries, 2);
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert_eq!(config.api.backoff(), Duration::from_secs(1));
        assert_eq!(config.analysis.delay(), Duration::from_millis(1500));
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let config = AppConfig::new().with_base_url("http://127.0.0.1:9000/");
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
    }
}
