use serde_json::Value;
use thiserror::Error;

/// Result type alias for IP-Sonar operations
pub type Result<T> = std::result::Result<T, SonarError>;

/// Errors that can occur when using the IP-Sonar API
#[derive(Error, Debug)]
pub enum SonarError {
    /// Caller-supplied arguments violate a documented precondition
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The API answered with a non-success status or an undecodable body
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable message (API message or status line)
        message: String,
        /// Message extracted from a `{"message": "..."}` error body
        api_message: Option<String>,
        /// Raw response body: parsed JSON, the body text, or `null`
        body: Value,
    },

    /// No response could be obtained from the API
    #[error("network error: failed to connect to API")]
    Network,

    /// The request deadline was exceeded
    #[error("request timed out")]
    Timeout,

    /// Any other failure while performing the request
    #[error("request failed: {0}")]
    Unknown(String),

    /// The client could not be constructed
    #[error("configuration error: {0}")]
    Config(String),
}

impl SonarError {
    /// Build an API error from a non-success response.
    ///
    /// The API message wins over the status line when present.
    #[must_use]
    pub fn from_status(
        status: u16,
        reason: Option<&str>,
        body: Value,
        api_message: Option<String>,
    ) -> Self {
        let message = api_message.clone().unwrap_or_else(|| match reason {
            Some(reason) => format!("HTTP {status}: {reason}"),
            None => format!("HTTP {status}"),
        });

        Self::Api {
            status,
            message,
            api_message,
            body,
        }
    }

    /// Build the error returned when a success response is not valid JSON
    #[must_use]
    pub fn undecodable(status: u16) -> Self {
        Self::Api {
            status,
            message: "failed to parse response as JSON".to_string(),
            api_message: None,
            body: Value::Null,
        }
    }

    /// Returns the HTTP status code if a response was received
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the message supplied by the API, if any
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { api_message, .. } => api_message.as_deref(),
            _ => None,
        }
    }

    /// Returns the raw response body of an API error
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns true if the request deadline was exceeded
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns true if the API could not be reached
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network)
    }

    /// Returns true if the call was rejected before touching the network
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
