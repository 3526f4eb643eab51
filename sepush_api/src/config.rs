//! Immutable client configuration.

use std::fmt;
use std::time::Duration;

use crate::{Error, ErrorKind};

/// Production host of the SePush API.
pub const DEFAULT_BASE_URL: &str = "https://developer.sepush.co.za";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Token, host, and timeout used by a [`crate::Client`].
///
/// A config always holds a non-blank token; the constructors reject anything else
/// with [`ErrorKind::InvalidToken`].
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    token: String,
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    pub fn new<'a>(token: impl Into<Option<&'a str>>) -> Result<Self, Error> {
        let token = match token.into() {
            Some(token) if !token.trim().is_empty() => token.to_string(),
            _ => {
                tracing::error!("Refusing to build a client without an API token");
                return Err(Error::new(ErrorKind::InvalidToken));
            }
        };
        Ok(Self {
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Reads `SEPUSH_TOKEN`, `SEPUSH_BASE_URL`, and `SEPUSH_TIMEOUT_SECS`.
    ///
    /// A timeout that is not a positive whole number of seconds is ignored.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = present("SEPUSH_TOKEN");
        let mut config = Self::new(token.as_deref())?;
        if let Some(base_url) = present("SEPUSH_BASE_URL") {
            config = config.with_base_url(&base_url);
        }
        let secs = present("SEPUSH_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0);
        if let Some(secs) = secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// The token stays out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_token_is_rejected() {
        for token in [None, Some(""), Some("   ")] {
            let err = ClientConfig::new(token).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidToken);
            assert_eq!(err.to_string(), "The Auth Token you provided was invalid.");
        }
    }

    #[test]
    fn token_is_kept_as_given() {
        let config = ClientConfig::new(" abc ").unwrap();
        assert_eq!(config.token(), " abc ");
    }

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn env_token_is_required() {
        let err = ClientConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidToken);

        let err = ClientConfig::from_lookup(lookup_from(&[("SEPUSH_TOKEN", "  ")])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidToken);
    }

    #[test]
    fn env_values_are_applied() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("SEPUSH_TOKEN", "abc"),
            ("SEPUSH_BASE_URL", "http://localhost:8080/"),
            ("SEPUSH_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.token(), "abc");
        assert_eq!(config.base_url(), "http://localhost:8080");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn env_defaults_when_optional_values_missing_or_blank() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("SEPUSH_TOKEN", "abc"),
            ("SEPUSH_BASE_URL", ""),
        ]))
        .unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn env_timeout_ignores_bad_values() {
        for secs in ["thirty", "0", "-5", ""] {
            let config = ClientConfig::from_lookup(lookup_from(&[
                ("SEPUSH_TOKEN", "abc"),
                ("SEPUSH_TIMEOUT_SECS", secs),
            ]))
            .unwrap();
            assert_eq!(config.timeout(), DEFAULT_TIMEOUT, "SEPUSH_TIMEOUT_SECS={secs:?}");
        }
    }

    #[test]
    fn from_env_reads_process_environment() {
        std::env::set_var("SEPUSH_TOKEN", "from-env-token");
        let config = ClientConfig::from_env();
        std::env::remove_var("SEPUSH_TOKEN");
        assert_eq!(config.unwrap().token(), "from-env-token");
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::new("abc").unwrap();
        assert_eq!(config.token(), "abc");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let config = ClientConfig::new("abc")
            .unwrap()
            .with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn debug_output_hides_token() {
        let config = ClientConfig::new("super-secret").unwrap();
        let out = format!("{config:?}");
        assert!(!out.contains("super-secret"));
        assert!(out.contains("<redacted>"));
    }
}
