//! Maps raw HTTP outcomes to a parsed payload or an [`Error`].
//!
//! The SePush API signals failure in two ways: through the HTTP status and
//! through an `"error"` member in the JSON body. Either one makes the call a
//! failure. When the body carries `"error"`, the status still picks the kind,
//! so a 200 with `"error"` ends up as [`ErrorKind::Unexpected`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Error, ErrorKind};

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Option<String>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }
}

/// Kind raised for a failed response with the given status.
pub fn classify_status(status: u16) -> ErrorKind {
    match status {
        400 => ErrorKind::BadRequest,
        403 => ErrorKind::Authentication,
        404 => ErrorKind::NotFound,
        408 => ErrorKind::RequestTimeout,
        429 => ErrorKind::RateLimit,
        500..=599 => ErrorKind::Server,
        _ => ErrorKind::Unexpected,
    }
}

/// Turns a response into a JSON value, or the error it represents.
///
/// `None` stands for "no response at all" and yields
/// [`ErrorKind::Unexpected`].
pub fn handle_response(response: Option<RawResponse>) -> Result<Value, Error> {
    let Some(response) = response else {
        tracing::error!("No response received");
        return Err(Error::new(ErrorKind::Unexpected));
    };

    let parsed = response
        .body
        .as_deref()
        .filter(|body| !body.trim().is_empty())
        .map(serde_json::from_str::<Value>);

    let upstream_error = match &parsed {
        Some(Ok(value)) => error_field(value),
        _ => None,
    };

    if upstream_error.is_some() || response.status != 200 {
        let err = Error::from_status(response.status, upstream_error.flatten());
        tracing::warn!(
            status = response.status,
            kind = %err.kind(),
            body = %truncate_body(response.body.as_deref().unwrap_or_default()),
            "Request failed"
        );
        return Err(err);
    }

    match parsed {
        Some(Ok(value)) => {
            tracing::debug!(status = response.status, "Parsed response body");
            Ok(value)
        }
        Some(Err(e)) => {
            let body = response.body.as_deref().unwrap_or_default();
            tracing::error!("Failed to parse response: {} | body: {}", e, truncate_body(body));
            Err(Error::new(ErrorKind::Unexpected).with_source(e))
        }
        None => {
            tracing::error!("Response with status 200 had an empty body");
            Err(Error::new(ErrorKind::Unexpected))
        }
    }
}

/// Projects a generic payload onto a typed struct from [`crate::types`].
pub fn parse_as<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|e| {
        tracing::error!("Payload did not match the expected shape: {}", e);
        Error::new(ErrorKind::Unexpected).with_source(e)
    })
}

/// `Some(text)` when the body has a non-null `"error"` member. The inner
/// option is `None` when that member is not a string.
fn error_field(value: &Value) -> Option<Option<String>> {
    match value.get("error")? {
        Value::Null => None,
        Value::String(text) => Some(Some(text.clone())),
        other => Some(Some(other.to_string())),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
