//! Client configuration.
//!
//! Like the other service URLs of the web build, the API location is baked
//! in at compile time: set `RIDE_API_URL` (and optionally `RIDE_LOCALE`)
//! when running the bundler. Tests build a config directly with
//! [`ClientConfig::new`].

use reqwest::Url;
use ride_common::i18n::Locale;
use thiserror::Error;

/// Where the API lives when `RIDE_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/local-transportation/";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Always ends with `/` so endpoint paths join beneath it.
    pub base_url: Url,
    pub locale: Locale,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            locale: Locale::default(),
        })
    }

    /// Configuration from the compile-time environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = option_env!("RIDE_API_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        let config = Self::new(url)?;
        Ok(match locale_from_env() {
            Some(locale) => config.with_locale(locale),
            None => config,
        })
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// `RIDE_LOCALE` if it was set at build time.
pub fn locale_from_env() -> Option<Locale> {
    option_env!("RIDE_LOCALE")
        .filter(|s| !s.trim().is_empty())
        .map(Locale::from_tag)
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    let url = Url::parse(&normalized).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    Ok(url)
}
