//! Client configuration types.

use ipsonar_core::LookupParams;
use std::time::Duration;

/// The IP-Sonar API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.ip-sonar.com";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Construction-time configuration for an [`IpSonarClient`](crate::IpSonarClient)
#[derive(Clone)]
pub struct ClientConfig {
    /// API key sent in the `x-api-key` header (optional)
    pub api_key: Option<String>,

    /// Base URL of the API
    pub base_url: String,

    /// Parameters applied to every request unless overridden per call
    pub default_params: Option<LookupParams>,

    /// Default request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_params: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the default query parameters
    #[must_use]
    pub fn default_params(mut self, params: LookupParams) -> Self {
        self.default_params = Some(params);
        self
    }

    /// Set the default timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("default_params", &self.default_params)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Per-call overrides
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Parameters merged over the client's defaults
    pub params: Option<LookupParams>,

    /// Timeout replacing the client's default
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Create empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override query parameters for this call
    #[must_use]
    pub fn params(mut self, params: LookupParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Override the timeout for this call
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
