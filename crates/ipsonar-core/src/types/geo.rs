use serde::{Deserialize, Serialize};

/// Geolocation information for a single IP address
///
/// Every field is optional: the API only returns the fields selected with
/// the `fields` query parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// IP address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    /// Latitude coordinate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude coordinate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Postal/ZIP code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Radius in kilometers within which the address is expected to be located
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_radius: Option<u32>,

    /// Continent code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent_code: Option<ContinentCode>,

    /// Continent name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent_name: Option<String>,

    /// Two-letter country code (ISO 3166-1 alpha-2)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// Full country name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,

    /// ISO 3166-2 code of the first subdivision (1-3 characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdivision_1_code: Option<String>,

    /// Name of the first subdivision (state/province)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdivision_1_name: Option<String>,

    /// ISO 3166-2 code of the second subdivision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdivision_2_code: Option<String>,

    /// Name of the second subdivision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdivision_2_name: Option<String>,

    /// City name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,

    /// IANA timezone (e.g. "America/New_York")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Whether the country belongs to the European Union
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_in_eu: Option<bool>,
}

impl GeoLocation {
    /// Returns true if the location has coordinates
    #[must_use]
    pub const fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// Returns the coordinates as a tuple if available
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Continent code
///
/// Codes outside the known set decode as [`ContinentCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContinentCode {
    /// Africa
    Af,
    /// Antarctica
    An,
    /// Asia
    As,
    /// Europe
    Eu,
    /// North America
    Na,
    /// Oceania
    Oc,
    /// South America
    Sa,
    /// Any code the API sends that is not listed above
    #[serde(other)]
    Unknown,
}

impl ContinentCode {
    /// Two-letter code as sent by the API
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Af => "AF",
            Self::An => "AN",
            Self::As => "AS",
            Self::Eu => "EU",
            Self::Na => "NA",
            Self::Oc => "OC",
            Self::Sa => "SA",
            Self::Unknown => "??",
        }
    }

    /// English continent name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Af => "Africa",
            Self::An => "Antarctica",
            Self::As => "Asia",
            Self::Eu => "Europe",
            Self::Na => "North America",
            Self::Oc => "Oceania",
            Self::Sa => "South America",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for ContinentCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record() {
        let json = r#"{
            "ip": "8.8.8.8",
            "latitude": 37.751,
            "longitude": -97.822,
            "accuracy_radius": 1000,
            "continent_code": "NA",
            "continent_name": "North America",
            "country_code": "US",
            "country_name": "United States",
            "timezone": "America/Chicago",
            "is_in_eu": false
        }"#;
        let geo: GeoLocation = serde_json::from_str(json).unwrap();
        assert_eq!(geo.ip.as_deref(), Some("8.8.8.8"));
        assert_eq!(geo.continent_code, Some(ContinentCode::Na));
        assert_eq!(geo.accuracy_radius, Some(1000));
        assert_eq!(geo.is_in_eu, Some(false));
        assert_eq!(geo.coordinates(), Some((37.751, -97.822)));
        assert!(geo.city_name.is_none());
    }

    #[test]
    fn test_partial_record() {
        let geo: GeoLocation = serde_json::from_str(r#"{"city_name": "Berlin"}"#).unwrap();
        assert_eq!(geo.city_name.as_deref(), Some("Berlin"));
        assert!(!geo.has_coordinates());
        assert_eq!(serde_json::to_string(&geo).unwrap(), r#"{"city_name":"Berlin"}"#);
    }

    #[test]
    fn test_continent_code() {
        let code: ContinentCode = serde_json::from_str(r#""EU""#).unwrap();
        assert_eq!(code, ContinentCode::Eu);
        assert_eq!(code.to_string(), "EU");
        assert_eq!(code.name(), "Europe");

        let odd: ContinentCode = serde_json::from_str(r#""XX""#).unwrap();
        assert_eq!(odd, ContinentCode::Unknown);
    }

    #[test]
    fn test_unlisted_continent_keeps_record() {
        let geo: GeoLocation =
            serde_json::from_str(r#"{"ip": "8.8.8.8", "continent_code": ""}"#).unwrap();
        assert_eq!(geo.ip.as_deref(), Some("8.8.8.8"));
        assert_eq!(geo.continent_code, Some(ContinentCode::Unknown));
    }
}
