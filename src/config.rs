// src/config.rs

use thiserror::Error;
use url::Url;

pub const API_URL_ENV: &str = "DOMSCAN_API_URL";
pub const LOCALE_ENV: &str = "DOMSCAN_LOCALE";

pub const DEFAULT_API_URL: &str = "http://localhost:8082";
pub const DEFAULT_LOCALE: &str = "en";

/// Locales shipped in `locales/`.
pub const SUPPORTED_LOCALES: &[&str] = &["en", "fr"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL ({value}): {source}")]
    InvalidApiUrl {
        var: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{var} must use http or https, got {scheme}")]
    UnsupportedScheme { var: &'static str, scheme: String },

    #[error("{var}: unsupported locale {value} (expected one of {expected})")]
    UnsupportedLocale {
        var: &'static str,
        value: String,
        expected: String,
    },
}

/// Read-only, process-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base address of the scanning service.
    pub api_url: Url,
    /// Language of the user-facing messages.
    pub locale: String,
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through `lookup`; unset or blank values fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, fallback: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        let raw_url = get(API_URL_ENV, DEFAULT_API_URL);
        let api_url = Url::parse(&raw_url).map_err(|source| ConfigError::InvalidApiUrl {
            var: API_URL_ENV,
            value: raw_url.clone(),
            source,
        })?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                var: API_URL_ENV,
                scheme: api_url.scheme().to_string(),
            });
        }

        let locale = get(LOCALE_ENV, DEFAULT_LOCALE).to_ascii_lowercase();
        if !SUPPORTED_LOCALES.contains(&locale.as_str()) {
            return Err(ConfigError::UnsupportedLocale {
                var: LOCALE_ENV,
                value: locale,
                expected: SUPPORTED_LOCALES.join(", "),
            });
        }

        Ok(Self { api_url, locale })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:8082/");
        assert_eq!(config.locale, "en");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = load(&[(API_URL_ENV, "  "), (LOCALE_ENV, "")]).unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:8082/");
        assert_eq!(config.locale, "en");
    }

    #[test]
    fn values_are_read_from_the_lookup() {
        let config = load(&[(API_URL_ENV, "https://scan.example.com/api"), (LOCALE_ENV, "FR")]).unwrap();
        assert_eq!(config.api_url.host_str(), Some("scan.example.com"));
        assert_eq!(config.locale, "fr");
    }

    #[test]
    fn rejects_bad_urls_and_schemes() {
        assert!(matches!(
            load(&[(API_URL_ENV, "not a url")]),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
        assert!(matches!(
            load(&[(API_URL_ENV, "ftp://scan.example.com")]),
            Err(ConfigError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn rejects_unknown_locale() {
        assert!(matches!(
            load(&[(LOCALE_ENV, "de")]),
            Err(ConfigError::UnsupportedLocale { .. })
        ));
    }
}
