use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::GeoLocation;
use crate::{Result, SonarError};

/// Maximum number of addresses accepted by a single batch request
pub const MAX_BATCH_SIZE: usize = 100;

/// Request body for a batch lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchLookupRequest {
    /// IP addresses to look up (1-100 items)
    pub data: Vec<String>,
}

impl BatchLookupRequest {
    /// Build a validated batch request.
    ///
    /// Rejects an empty list, more than [`MAX_BATCH_SIZE`] entries, and
    /// empty addresses (reporting the first offending index).
    pub fn new<I, S>(addresses: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let data: Vec<String> = addresses
            .into_iter()
            .take(MAX_BATCH_SIZE + 1)
            .map(Into::into)
            .collect();

        if data.is_empty() {
            return Err(SonarError::InvalidInput(
                "IP address list is required and must not be empty".to_string(),
            ));
        }

        if data.len() > MAX_BATCH_SIZE {
            return Err(SonarError::InvalidInput(format!(
                "maximum of {MAX_BATCH_SIZE} IP addresses allowed per batch request"
            )));
        }

        if let Some(index) = data.iter().position(String::is_empty) {
            return Err(SonarError::InvalidInput(format!(
                "IP at index {index} must be a non-empty string"
            )));
        }

        Ok(Self { data })
    }

    /// Number of addresses in the request
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the request holds no addresses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Response of a batch lookup, in the same order as the request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchLookupResponse {
    /// Geolocation records
    pub data: Vec<GeoLocation>,
}

impl BatchLookupResponse {
    /// Find the record for a given address
    #[must_use]
    pub fn get(&self, ip: &str) -> Option<&GeoLocation> {
        self.data.iter().find(|geo| geo.ip.as_deref() == Some(ip))
    }

    /// Iterate over the records
    pub fn iter(&self) -> impl Iterator<Item = &GeoLocation> {
        self.data.iter()
    }
}

impl IntoIterator for BatchLookupResponse {
    type Item = GeoLocation;
    type IntoIter = std::vec::IntoIter<GeoLocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Error body returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessageResponse {
    /// Error message
    pub message: String,
}

impl ErrorMessageResponse {
    /// Extract a non-empty `message` string from a decoded error body
    #[must_use]
    pub fn extract(body: &Value) -> Option<String> {
        body.get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_request_valid() {
        let req = BatchLookupRequest::new(["8.8.8.8", "1.1.1.1"]).unwrap();
        assert_eq!(req.len(), 2);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"data": ["8.8.8.8", "1.1.1.1"]})
        );
    }

    #[test]
    fn test_batch_request_empty() {
        let err = BatchLookupRequest::new(Vec::<String>::new()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_batch_request_limits() {
        let max: Vec<String> = (0..100).map(|i| format!("10.0.0.{i}")).collect();
        assert!(BatchLookupRequest::new(max).is_ok());

        let over: Vec<String> = (0..101).map(|i| format!("10.0.0.{i}")).collect();
        assert!(BatchLookupRequest::new(over).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_batch_request_stops_reading_oversized_input() {
        let mut pulled = 0;
        let addresses = std::iter::repeat_with(|| {
            pulled += 1;
            "10.0.0.1"
        })
        .take(10_000);
        let err = BatchLookupRequest::new(addresses).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(pulled, MAX_BATCH_SIZE + 1);
    }

    #[test]
    fn test_batch_request_reports_index() {
        let err = BatchLookupRequest::new(["8.8.8.8", "", "1.1.1.1", ""]).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_batch_response_order() {
        let json = r#"{"data":[{"ip":"8.8.8.8"},{"ip":"1.1.1.1"}]}"#;
        let resp: BatchLookupResponse = serde_json::from_str(json).unwrap();
        let ips: Vec<_> = resp.iter().filter_map(|g| g.ip.as_deref()).collect();
        assert_eq!(ips, ["8.8.8.8", "1.1.1.1"]);
        assert!(resp.get("1.1.1.1").is_some());
        assert!(resp.get("9.9.9.9").is_none());
    }

    #[test]
    fn test_batch_response_requires_data() {
        assert!(serde_json::from_str::<BatchLookupResponse>(r#"{"unexpected":true}"#).is_err());
    }

    #[test]
    fn test_batch_response_tolerates_unlisted_continent() {
        let json = r#"{"data":[{"ip":"8.8.8.8","continent_code":""},{"ip":"1.1.1.1","continent_code":"OC"}]}"#;
        let resp: BatchLookupResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.len(), 2);
        assert_eq!(resp.data[1].continent_code, Some(crate::ContinentCode::Oc));
    }

    #[test]
    fn test_extract_message() {
        assert_eq!(
            ErrorMessageResponse::extract(&json!({"message": "not found"})),
            Some("not found".to_string())
        );
        assert_eq!(ErrorMessageResponse::extract(&json!({"message": ""})), None);
        assert_eq!(ErrorMessageResponse::extract(&json!({"error": "x"})), None);
        assert_eq!(ErrorMessageResponse::extract(&json!("plain")), None);
    }
}
