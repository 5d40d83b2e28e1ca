//! Main IP-Sonar API client implementation.

use crate::config::{ClientConfig, RequestOptions};
use crate::transport::HttpTransport;
use crate::USER_AGENT;
use ipsonar_core::{
    BatchLookupRequest, BatchLookupResponse, GeoLocation, LookupParams, Result, SonarError,
};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Endpoint returning the caller's own address
const MY_IP_ENDPOINT: &str = "/v1/myip";

/// Endpoint accepting a list of addresses
const BATCH_ENDPOINT: &str = "/v1/batch";

/// Main IP-Sonar API client
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// # Example
///
/// ```rust,ignore
/// let client = IpSonarClient::new("your-api-key")?;
/// let geo = client.lookup_ip("8.8.8.8").await?;
/// println!("City: {:?}", geo.city_name);
/// ```
#[derive(Clone)]
pub struct IpSonarClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: HttpTransport,
    config: ClientConfig,
}

impl IpSonarClient {
    /// Create a new client with the given API key using default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        IpSonarClientBuilder::new().api_key(api_key).build()
    }

    /// Create a client from a complete configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        IpSonarClientBuilder::from_config(config).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> IpSonarClientBuilder {
        IpSonarClientBuilder::new()
    }

    /// The configuration this client was built with
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Look up geolocation information for the caller's own address
    pub async fn lookup_my_ip(&self) -> Result<GeoLocation> {
        self.lookup_my_ip_with(&RequestOptions::default()).await
    }

    /// Look up the caller's own address with per-call overrides
    #[instrument(skip_all, level = "debug")]
    pub async fn lookup_my_ip_with(&self, options: &RequestOptions) -> Result<GeoLocation> {
        let params = self.merge_params(options);

        self.inner
            .transport
            .get(MY_IP_ENDPOINT, params.as_ref(), options.timeout)
            .await
    }

    /// Look up geolocation information for a specific address
    pub async fn lookup_ip(&self, ip: &str) -> Result<GeoLocation> {
        self.lookup_ip_with(ip, &RequestOptions::default()).await
    }

    /// Look up a specific address with per-call overrides
    #[instrument(skip(self, options), level = "debug")]
    pub async fn lookup_ip_with(&self, ip: &str, options: &RequestOptions) -> Result<GeoLocation> {
        if ip.is_empty() {
            return Err(SonarError::InvalidInput(
                "IP address is required and must be a non-empty string".to_string(),
            ));
        }

        let params = self.merge_params(options);
        let endpoint = format!("/v1/{}", urlencoding::encode(ip));

        self.inner
            .transport
            .get(&endpoint, params.as_ref(), options.timeout)
            .await
    }

    /// Look up up to 100 addresses in a single request
    ///
    /// Records come back in the order the addresses were given; the API
    /// guarantees this, it is not re-checked here.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let results = client.batch_lookup(["8.8.8.8", "1.1.1.1"]).await?;
    /// for geo in &results.data {
    ///     println!("{:?}: {:?}", geo.ip, geo.country_name);
    /// }
    /// ```
    pub async fn batch_lookup<I, S>(&self, ips: I) -> Result<BatchLookupResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.batch_lookup_with(ips, &RequestOptions::default()).await
    }

    /// Batch lookup with per-call overrides
    pub async fn batch_lookup_with<I, S>(
        &self,
        ips: I,
        options: &RequestOptions,
    ) -> Result<BatchLookupResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = BatchLookupRequest::new(ips)?;
        self.send_batch(&request, options).await
    }

    #[instrument(skip_all, fields(count = request.len()), level = "debug")]
    async fn send_batch(
        &self,
        request: &BatchLookupRequest,
        options: &RequestOptions,
    ) -> Result<BatchLookupResponse> {
        let params = self.merge_params(options);

        self.inner
            .transport
            .post(BATCH_ENDPOINT, request, params.as_ref(), options.timeout)
            .await
    }

    fn merge_params(&self, options: &RequestOptions) -> Option<LookupParams> {
        LookupParams::merge(
            self.inner.config.default_params.as_ref(),
            options.params.as_ref(),
        )
    }
}

impl std::fmt::Debug for IpSonarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IpSonarClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

/// Builder for configuring an [`IpSonarClient`]
pub struct IpSonarClientBuilder {
    config: ClientConfig,
    user_agent: String,
}

impl Default for IpSonarClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IpSonarClientBuilder {
    /// Create a new builder with default settings and no API key
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(ClientConfig::default())
    }

    /// Start from an existing configuration
    #[must_use]
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Set the API key
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set parameters applied to every request
    #[must_use]
    pub fn default_params(mut self, params: LookupParams) -> Self {
        self.config.default_params = Some(params);
        self
    }

    /// Set the default request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(mut self) -> Result<IpSonarClient> {
        self.config.base_url = self.config.base_url.trim_end_matches('/').to_string();

        let http = HttpClient::builder()
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| SonarError::Config(e.to_string()))?;

        debug!(base_url = %self.config.base_url, "Building IP-Sonar client");

        let transport = HttpTransport::new(
            http,
            self.config.base_url.clone(),
            self.config.api_key.clone(),
            self.config.timeout,
        );

        Ok(IpSonarClient {
            inner: Arc::new(ClientInner {
                transport,
                config: self.config,
            }),
        })
    }
}

// URL encoding helper
mod urlencoding {
    use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

    /// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
    const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
        .remove(b'-')
        .remove(b'_')
        .remove(b'.')
        .remove(b'!')
        .remove(b'~')
        .remove(b'*')
        .remove(b'\'')
        .remove(b'(')
        .remove(b')');

    /// Percent-encode a single path segment
    pub fn encode(s: &str) -> String {
        utf8_percent_encode(s, COMPONENT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipsonar_core::LocaleCode;

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(urlencoding::encode("8.8.8.8"), "8.8.8.8");
        assert_eq!(urlencoding::encode("2001:db8::1"), "2001%3Adb8%3A%3A1");
        assert_eq!(urlencoding::encode("a b/c"), "a%20b%2Fc");
        assert_eq!(urlencoding::encode("fe80::1%eth0"), "fe80%3A%3A1%25eth0");
        assert_eq!(urlencoding::encode("!~*'()"), "!~*'()");
        assert_eq!(urlencoding::encode("?#&+="), "%3F%23%26%2B%3D");
    }

    #[test]
    fn test_builder_trims_base_url() {
        let client = IpSonarClient::builder()
            .base_url("http://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(client.config().base_url, "http://localhost:8080");
    }

    #[test]
    fn test_merge_uses_defaults() {
        let client = IpSonarClient::builder()
            .default_params(LookupParams::new().locale(LocaleCode::De))
            .build()
            .unwrap();

        let merged = client.merge_params(&RequestOptions::default()).unwrap();
        assert_eq!(merged.locale_code, Some(LocaleCode::De));

        let options = RequestOptions::new().params(LookupParams::new().raw_fields("ip"));
        let merged = client.merge_params(&options).unwrap();
        assert_eq!(merged.fields.as_deref(), Some("ip"));
        assert_eq!(merged.locale_code, Some(LocaleCode::De));
    }

    #[test]
    fn test_merge_without_params() {
        let client = IpSonarClient::builder().build().unwrap();
        assert!(client.merge_params(&RequestOptions::default()).is_none());
    }

    #[test]
    fn test_empty_ip_rejected_without_runtime_io() {
        let client = IpSonarClient::builder()
            .base_url("http://127.0.0.1:1")
            .build()
            .unwrap();
        let err = tokio_test::block_on(client.lookup_ip("")).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_batch_rejected_without_runtime_io() {
        let client = IpSonarClient::builder()
            .base_url("http://127.0.0.1:1")
            .build()
            .unwrap();
        let err = tokio_test::block_on(client.batch_lookup(["8.8.8.8", ""])).unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }
}
