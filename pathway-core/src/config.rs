//! Service endpoint configuration.
//!
//! The base URL is read once at startup and injected into the HTTP backend;
//! nothing else looks at the environment.

use std::env;

/// Hosted recommendation service, used when the environment does not
/// provide a URL.
pub const DEFAULT_BASE_URL: &str = "https://pathway-ai-backend.onrender.com";

/// Environment variable overriding the service base URL.
pub const BASE_URL_ENV: &str = "PATHWAY_API_URL";

/// Remote service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the recommendation service, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Configuration pointing at a specific base URL.
    ///
    /// Trailing slashes are stripped so endpoint paths can be appended
    /// directly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read [`BASE_URL_ENV`], falling back to [`DEFAULT_BASE_URL`] when the
    /// variable is unset or blank.
    pub fn from_env() -> Self {
        Self::from_override(env::var(BASE_URL_ENV).ok())
    }

    fn from_override(url: Option<String>) -> Self {
        match url {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
