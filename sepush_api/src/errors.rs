//! Error types for the API client.
//!
//! Every failure is a single [`Error`] tagged with an [`ErrorKind`]. The kind
//! decides the human-readable message; the status code, upstream text, and
//! underlying cause are kept alongside for debugging.

use std::fmt;

/// The category of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The token was missing or blank at construction.
    InvalidToken,
    /// HTTP 400, or a required parameter was missing before sending.
    BadRequest,
    /// HTTP 403.
    Authentication,
    /// HTTP 404.
    NotFound,
    /// HTTP 408.
    RequestTimeout,
    /// HTTP 429. The API allowance is used up.
    RateLimit,
    /// HTTP 5xx.
    Server,
    /// No response, an unmapped status, an unreadable body, or a transport failure.
    Unexpected,
}

impl ErrorKind {
    /// Fixed message shown for this kind.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorKind::InvalidToken => "The Auth Token you provided was invalid.",
            ErrorKind::BadRequest => "The request you sent was invalid.",
            ErrorKind::Authentication => "Authentication Error, check your credentials.",
            ErrorKind::NotFound => "The resource you requested was not found.",
            ErrorKind::RequestTimeout => "The request you sent timed out.",
            ErrorKind::RateLimit => "You have exceeded your API quota/allowance.",
            ErrorKind::Server => "The SePush API returned a server error.",
            ErrorKind::Unexpected => "Something went wrong while parsing your response data.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidToken => "InvalidTokenError",
            ErrorKind::BadRequest => "BadRequestError",
            ErrorKind::Authentication => "AuthenticationError",
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::RequestTimeout => "RequestTimeoutError",
            ErrorKind::RateLimit => "RateLimitError",
            ErrorKind::Server => "ServerError",
            ErrorKind::Unexpected => "UnexpectedError",
        };
        f.write_str(name)
    }
}

/// Underlying library error that triggered an [`Error`].
#[derive(thiserror::Error, Debug)]
pub enum Cause {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

/// Errors that can occur when making API requests.
///
/// `Display` renders only the fixed message for the kind, so callers can show
/// it to end users as-is.
#[derive(thiserror::Error, Debug)]
#[error("{}", .kind.message())]
pub struct Error {
    kind: ErrorKind,
    status: Option<u16>,
    upstream_message: Option<String>,
    #[source]
    source: Option<Cause>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            status: None,
            upstream_message: None,
            source: None,
        }
    }

    /// Error raised for an HTTP status, keeping the `"error"` text from the body if any.
    pub fn from_status(status: u16, upstream_message: Option<String>) -> Self {
        Self {
            kind: crate::response::classify_status(status),
            status: Some(status),
            upstream_message,
            source: None,
        }
    }

    pub(crate) fn with_source(mut self, source: impl Into<Cause>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status that produced this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// The `"error"` field of the response body, if the API sent one.
    pub fn upstream_message(&self) -> Option<&str> {
        self.upstream_message.as_deref()
    }

    /// True when the request never produced a response (connect failure, client timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self.source, Some(Cause::Http(_))) && self.status.is_none()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_fixed_message() {
        let err = Error::new(ErrorKind::RateLimit);
        assert_eq!(err.to_string(), "You have exceeded your API quota/allowance.");

        let err = Error::from_status(503, Some("down for maintenance".to_string()));
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.to_string(), "The SePush API returned a server error.");
        assert_eq!(err.upstream_message(), Some("down for maintenance"));
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn kind_display_uses_error_names() {
        assert_eq!(ErrorKind::InvalidToken.to_string(), "InvalidTokenError");
        assert_eq!(ErrorKind::Unexpected.to_string(), "UnexpectedError");
    }

    #[test]
    fn source_is_exposed() {
        use std::error::Error as _;

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::new(ErrorKind::Unexpected).with_source(json_err);
        assert!(err.source().is_some());
        assert!(!err.is_transport());
        assert!(Error::new(ErrorKind::NotFound).source().is_none());
    }
}
