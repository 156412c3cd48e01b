use anyhow::{Context, Result};
use url::Url;

use std::time::Duration;

use crate::retry::RetryPolicy;

pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";

/// `api_key` value the pet store accepts on protected operations.
pub const VALID_API_KEY: &str = "special-key";

const DEFAULT_CONSISTENCY_DELAY: Duration = Duration::from_secs(1);

/// Run-wide settings, built once and handed to [`crate::Harness::new`].
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub api_key: String,
    /// `None` keeps the HTTP client's own default.
    pub request_timeout: Option<Duration>,
    /// Pause between a write and the read that checks it became visible.
    pub consistency_delay: Duration,
    /// Policy applied to scenarios marked flaky.
    pub flaky_retry: RetryPolicy,
    /// Fixed RNG seed for reproducible test data.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: parse_base_url(DEFAULT_BASE_URL).expect("default base url is valid"),
            api_key: VALID_API_KEY.to_string(),
            request_timeout: None,
            consistency_delay: DEFAULT_CONSISTENCY_DELAY,
            flaky_retry: RetryPolicy::default(),
            seed: None,
        }
    }
}

impl Config {
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_consistency_delay(mut self, delay: Duration) -> Self {
        self.consistency_delay = delay;
        self
    }

    pub fn with_flaky_retry(mut self, policy: RetryPolicy) -> Self {
        self.flaky_retry = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Base URL without a trailing slash, ready for `"/pet"`-style suffixes.
    pub fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url.trim_end_matches('/'))
        .with_context(|| format!("invalid base url {:?}", base_url))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => bail!("unsupported scheme {:?} in base url {:?}", scheme, base_url),
    }
}
