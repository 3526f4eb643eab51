//! Shared query infrastructure: the [`Query`] trait and required-parameter checks.

use url::Url;

use crate::{Error, ErrorKind};

/// Trait implemented by all query builders.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Queries for parameterless endpoints.
impl Query for () {
    fn add_to_url(&self, url: &Url) -> Url {
        url.clone()
    }
}

/// Rejects a missing or blank text parameter before anything is sent.
pub(crate) fn required_text(name: &str, value: Option<&str>) -> Result<String, Error> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => {
            tracing::warn!("Missing required parameter `{}`", name);
            Err(Error::new(ErrorKind::BadRequest))
        }
    }
}

/// Rejects a missing or non-finite coordinate before anything is sent.
pub(crate) fn required_coordinate(name: &str, value: Option<f64>) -> Result<f64, Error> {
    match value {
        Some(value) if value.is_finite() => Ok(value),
        _ => {
            tracing::warn!("Missing or invalid coordinate `{}`", name);
            Err(Error::new(ErrorKind::BadRequest))
        }
    }
}
