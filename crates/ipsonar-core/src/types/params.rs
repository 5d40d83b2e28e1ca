use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language used for geolocation names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocaleCode {
    /// German
    De,
    /// English
    En,
    /// Spanish
    Es,
    /// French
    Fr,
    /// Japanese
    Ja,
    /// Brazilian Portuguese
    PtBr,
    /// Russian
    Ru,
    /// Simplified Chinese
    ZhCn,
}

impl LocaleCode {
    /// All supported locales
    pub const ALL: [Self; 8] = [
        Self::De,
        Self::En,
        Self::Es,
        Self::Fr,
        Self::Ja,
        Self::PtBr,
        Self::Ru,
        Self::ZhCn,
    ];

    /// Locale tag as sent in the `locale_code` query parameter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::Ja => "ja",
            Self::PtBr => "pt-br",
            Self::Ru => "ru",
            Self::ZhCn => "zh-cn",
        }
    }
}

impl std::fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocaleCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|locale| locale.as_str() == tag)
            .ok_or_else(|| {
                format!(
                    "unknown locale: {s} (expected one of: de, en, es, fr, ja, pt-br, ru, zh-cn)"
                )
            })
    }
}

/// Query parameters for lookup requests
///
/// # Example
///
/// ```rust,ignore
/// let params = LookupParams::new()
///     .fields(["country_code", "city_name"])
///     .locale(LocaleCode::De);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupParams {
    /// Comma-separated list of fields to include in the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Language for geolocation names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale_code: Option<LocaleCode>,
}

impl LookupParams {
    /// Create an empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the response to the given fields
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = fields
            .into_iter()
            .map(|f| f.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.fields = Some(joined);
        self
    }

    /// Set the raw comma-separated `fields` value
    #[must_use]
    pub fn raw_fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    /// Set the locale for geolocation names
    #[must_use]
    pub const fn locale(mut self, locale: LocaleCode) -> Self {
        self.locale_code = Some(locale);
        self
    }

    /// Returns true if no parameter is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_none() && self.locale_code.is_none()
    }

    /// Merge per-call parameters over defaults.
    ///
    /// Keys set in `overrides` win; unset keys fall back to `defaults`.
    /// Returns `None` when neither side is present.
    #[must_use]
    pub fn merge(defaults: Option<&Self>, overrides: Option<&Self>) -> Option<Self> {
        match (defaults, overrides) {
            (None, None) => None,
            (Some(d), None) => Some(d.clone()),
            (None, Some(o)) => Some(o.clone()),
            (Some(d), Some(o)) => Some(Self {
                fields: o.fields.clone().or_else(|| d.fields.clone()),
                locale_code: o.locale_code.or(d.locale_code),
            }),
        }
    }

    /// Query pairs in wire order: `fields`, then `locale_code`
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(ref fields) = self.fields {
            pairs.push(("fields", fields.as_str()));
        }
        if let Some(locale) = self.locale_code {
            pairs.push(("locale_code", locale.as_str()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_serde() {
        assert_eq!(serde_json::to_string(&LocaleCode::PtBr).unwrap(), r#""pt-br""#);
        assert_eq!(serde_json::to_string(&LocaleCode::ZhCn).unwrap(), r#""zh-cn""#);
        let locale: LocaleCode = serde_json::from_str(r#""de""#).unwrap();
        assert_eq!(locale, LocaleCode::De);
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("EN".parse::<LocaleCode>().unwrap(), LocaleCode::En);
        assert_eq!("zh_CN".parse::<LocaleCode>().unwrap(), LocaleCode::ZhCn);
        assert!("klingon".parse::<LocaleCode>().is_err());
    }

    #[test]
    fn test_fields_builder() {
        let params = LookupParams::new().fields(["country_code", "city_name"]);
        assert_eq!(params.fields.as_deref(), Some("country_code,city_name"));
    }

    #[test]
    fn test_merge_none() {
        assert_eq!(LookupParams::merge(None, None), None);
    }

    #[test]
    fn test_merge_override_wins() {
        let defaults = LookupParams::new().raw_fields("ip").locale(LocaleCode::En);
        let call = LookupParams::new().locale(LocaleCode::Fr);
        let merged = LookupParams::merge(Some(&defaults), Some(&call)).unwrap();
        assert_eq!(merged.fields.as_deref(), Some("ip"));
        assert_eq!(merged.locale_code, Some(LocaleCode::Fr));
    }

    #[test]
    fn test_merge_one_side() {
        let defaults = LookupParams::new().locale(LocaleCode::Ja);
        assert_eq!(
            LookupParams::merge(Some(&defaults), None),
            Some(defaults.clone())
        );
        assert_eq!(
            LookupParams::merge(None, Some(&defaults)),
            Some(defaults)
        );
    }

    #[test]
    fn test_merge_empty_yields_no_pairs() {
        let empty = LookupParams::new();
        let merged = LookupParams::merge(Some(&empty), Some(&empty)).unwrap();
        assert!(merged.is_empty());
        assert!(merged.query_pairs().is_empty());
    }

    #[test]
    fn test_query_pair_order() {
        let params = LookupParams::new()
            .locale(LocaleCode::PtBr)
            .raw_fields("city_name");
        assert_eq!(
            params.query_pairs(),
            vec![("fields", "city_name"), ("locale_code", "pt-br")]
        );
    }
}
