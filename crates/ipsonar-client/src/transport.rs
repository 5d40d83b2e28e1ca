//! Single HTTP exchange with outcome classification.

use ipsonar_core::{ErrorMessageResponse, LookupParams, Result, SonarError};
use reqwest::{header, Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-api-key";

/// Performs one request per call against the API.
pub(crate) struct HttpTransport {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpTransport {
    pub(crate) const fn new(
        http: HttpClient,
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            http,
            base_url,
            api_key,
            timeout,
        }
    }

    /// Perform a GET request
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Option<&LookupParams>,
        timeout: Option<Duration>,
    ) -> Result<T> {
        let url = self.build_url(endpoint, params);
        debug!(url = %url, "GET request");

        self.execute(self.request(Method::GET, &url), timeout).await
    }

    /// Perform a POST request with JSON body
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
        params: Option<&LookupParams>,
        timeout: Option<Duration>,
    ) -> Result<T> {
        let url = self.build_url(endpoint, params);
        debug!(url = %url, "POST request");

        let request = self.request(Method::POST, &url).json(body);
        self.execute(request, timeout).await
    }

    /// Build `base_url + endpoint + ?fields=..&locale_code=..`
    pub(crate) fn build_url(&self, endpoint: &str, params: Option<&LookupParams>) -> String {
        let mut url = format!("{}{}", self.base_url, endpoint);

        let pairs = params.map(LookupParams::query_pairs).unwrap_or_default();
        if !pairs.is_empty() {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs)
                .finish();
            url.push('?');
            url.push_str(&query);
        }

        url
    }

    /// Start a request with the content type and, if configured, the API key
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request = self
            .http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json");

        match self.api_key {
            Some(ref key) if !key.is_empty() => request.header(API_KEY_HEADER, key),
            _ => request,
        }
    }

    /// Run the exchange under the deadline.
    ///
    /// Dropping the exchange future on expiry aborts the in-flight request.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        timeout: Option<Duration>,
    ) -> Result<T> {
        let deadline = timeout.unwrap_or(self.timeout);

        if let Ok(result) = tokio::time::timeout(deadline, exchange(request)).await {
            result
        } else {
            warn!(timeout_ms = deadline.as_millis(), "Request timed out");
            Err(SonarError::Timeout)
        }
    }
}

async fn exchange<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await.map_err(classify)?;
    let status = response.status();

    if !status.is_success() {
        return Err(error_from_response(status, response).await);
    }

    let body = response
        .bytes()
        .await
        .map_err(|_| SonarError::undecodable(status.as_u16()))?;

    serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Response body is not the expected JSON");
        SonarError::undecodable(status.as_u16())
    })
}

/// Convert a non-success response into an API error
async fn error_from_response(status: StatusCode, response: Response) -> SonarError {
    let (body, api_message) = match response.text().await {
        Ok(text) => match serde_json::from_str::<Value>(&text) {
            Ok(json) => {
                let message = ErrorMessageResponse::extract(&json);
                (json, message)
            }
            Err(_) => (Value::String(text), None),
        },
        Err(_) => (Value::Null, None),
    };

    let err = SonarError::from_status(
        status.as_u16(),
        status.canonical_reason(),
        body,
        api_message,
    );
    warn!(status = status.as_u16(), error = %err, "IP-Sonar API error");
    err
}

/// Map a transport failure onto an error kind.
///
/// Anything that fails on the wire before a status line arrives (refused,
/// reset or closed connection) is a network error.
fn classify(err: reqwest::Error) -> SonarError {
    if err.is_timeout() {
        SonarError::Timeout
    } else if !err.is_builder() && (err.is_connect() || err.is_request()) {
        debug!(error = %error_chain(&err), "Request failed before a response");
        SonarError::Network
    } else {
        SonarError::Unknown(error_chain(&err))
    }
}

/// Render an error followed by its `source()` chain, `: `-separated
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipsonar_core::LocaleCode;

    fn transport() -> HttpTransport {
        HttpTransport::new(
            HttpClient::new(),
            "https://api.ip-sonar.com".to_string(),
            None,
            Duration::from_secs(10),
        )
    }

    #[test]
    fn test_url_without_params() {
        let t = transport();
        assert_eq!(
            t.build_url("/v1/8.8.8.8", None),
            "https://api.ip-sonar.com/v1/8.8.8.8"
        );
        assert_eq!(
            t.build_url("/v1/myip", Some(&LookupParams::new())),
            "https://api.ip-sonar.com/v1/myip"
        );
    }

    #[test]
    fn test_url_with_params() {
        let params = LookupParams::new()
            .locale(LocaleCode::ZhCn)
            .fields(["country_code", "city_name"]);
        assert_eq!(
            transport().build_url("/v1/batch", Some(&params)),
            "https://api.ip-sonar.com/v1/batch?fields=country_code%2Ccity_name&locale_code=zh-cn"
        );
    }

    #[derive(Debug)]
    struct Layer(&'static str, Option<Box<Layer>>);

    impl std::fmt::Display for Layer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.0)
        }
    }

    impl std::error::Error for Layer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.1.as_deref().map(|e| e as &(dyn std::error::Error + 'static))
        }
    }

    #[test]
    fn test_error_chain_includes_causes() {
        let err = Layer(
            "error sending request",
            Some(Box::new(Layer(
                "client error",
                Some(Box::new(Layer("connection reset by peer", None))),
            ))),
        );
        assert_eq!(
            error_chain(&err),
            "error sending request: client error: connection reset by peer"
        );
        assert_eq!(error_chain(&Layer("builder error", None)), "builder error");
    }

    #[test]
    fn test_url_locale_only() {
        let params = LookupParams::new().locale(LocaleCode::En);
        assert_eq!(
            transport().build_url("/v1/myip", Some(&params)),
            "https://api.ip-sonar.com/v1/myip?locale_code=en"
        );
    }
}
