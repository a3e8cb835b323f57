//! Failure taxonomy for network calls.
//!
//! [`Error`] is what a transport or a converter raises. The classifiers in
//! [`crate::classify`] turn any of these into a [`crate::NetworkResponse`],
//! so callers never have to match on it directly unless they inspect a
//! `NetworkError` or `UnknownError`.

use derive_more::{Display, Error};

use crate::Response;

/// Main error type for network call failures.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// HTTP failure wrapping a completed, unsuccessful response.
    ///
    /// Transports that turn non-2xx statuses into failures should raise this
    /// variant and keep the response when they have it.
    #[display("HTTP error {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
        /// The wrapped response, if it could be retained.
        #[error(not(source))]
        response: Option<Response>,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    Timeout,

    /// The call was cancelled before a response arrived.
    #[display("request cancelled")]
    Cancelled,

    /// I/O failure while reading or writing the exchange.
    #[display("I/O error ({kind}): {message}")]
    Io {
        /// Kind reported by the underlying I/O error.
        #[error(not(source))]
        kind: std::io::ErrorKind,
        /// Error message.
        message: String,
    },

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    InvalidRequest(#[error(not(source))] String),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    JsonSerialization(#[error(not(source))] String),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    JsonDeserialization {
        /// JSON path to the error (e.g., "user.address.city").
        path: String,
        /// Error message.
        message: String,
    },

    /// A body converter rejected its input.
    #[display("decode error: {_0}")]
    Decode(#[error(not(source))] String),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an HTTP error from status code and message.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
            response: None,
        }
    }

    /// Create an HTTP error wrapping the response that caused it.
    #[must_use]
    pub fn http_with_response(message: impl Into<String>, response: Response) -> Self {
        Self::Http {
            status: response.status(),
            message: message.into(),
            response: Some(response),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an I/O error.
    #[must_use]
    pub fn io(kind: std::io::ErrorKind, message: impl Into<String>) -> Self {
        Self::Io {
            kind,
            message: message.into(),
        }
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Returns `true` if the round trip never completed.
    ///
    /// These failures are classified as `NetworkError`.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::Tls(_) | Self::Timeout | Self::Cancelled | Self::Io { .. }
        )
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns the HTTP status code if this is an HTTP error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the wrapped response if this is an HTTP error that kept one.
    #[must_use]
    pub const fn http_response(&self) -> Option<&Response> {
        match self {
            Self::Http { response, .. } => response.as_ref(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::TimedOut => Self::Timeout,
            kind => Self::io(kind, err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonSerialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert2::{check, let_assert};
    use bytes::Bytes;

    use super::*;

    #[test]
    fn error_display() {
        insta::assert_snapshot!(Error::http(404, "Not Found"), @"HTTP error 404: Not Found");
        insta::assert_snapshot!(Error::Timeout, @"request timeout");
        insta::assert_snapshot!(Error::Cancelled, @"request cancelled");
        insta::assert_snapshot!(
            Error::connection("failed to connect"),
            @"connection error: failed to connect"
        );
        insta::assert_snapshot!(
            Error::json_deserialization("user.address.city", "missing field `city`"),
            @"JSON deserialization error at 'user.address.city': missing field `city`"
        );
    }

    #[test]
    fn error_status() {
        check!(Error::http(404, "Not Found").status() == Some(404));
        check!(Error::Timeout.status().is_none());

        let response = Response::new(503, HashMap::new(), Bytes::new());
        let err = Error::http_with_response("Service Unavailable", response.clone());
        check!(err.status() == Some(503));
        check!(err.http_response() == Some(&response));
    }

    #[test]
    fn error_is_network() {
        check!(Error::connection("reset").is_network());
        check!(Error::tls("bad certificate").is_network());
        check!(Error::Timeout.is_network());
        check!(Error::Cancelled.is_network());
        check!(Error::io(std::io::ErrorKind::BrokenPipe, "closed").is_network());

        check!(!Error::http(500, "boom").is_network());
        check!(!Error::decode("bad").is_network());
        check!(!Error::invalid_request("missing host").is_network());
    }

    #[test]
    fn error_is_timeout() {
        check!(Error::Timeout.is_timeout());
        check!(!Error::http(404, "Not Found").is_timeout());
    }

    #[test]
    fn error_is_connection() {
        check!(Error::connection("failed").is_connection());
        check!(!Error::Timeout.is_connection());
    }

    #[test]
    fn from_io_error() {
        let err = Error::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset by peer",
        ));
        let_assert!(Error::Io { kind, message } = err);
        check!(kind == std::io::ErrorKind::ConnectionReset);
        check!(message == "connection reset by peer");

        let err = Error::from(std::io::Error::new(std::io::ErrorKind::TimedOut, "slow"));
        check!(err == Error::Timeout);
    }

    #[test]
    fn from_serde_json_error() {
        let_assert!(Err(json_err) = serde_json::from_str::<u32>("nope"));
        let err = Error::from(json_err);
        check!(matches!(err, Error::JsonSerialization(_)));
        check!(!err.is_network());
    }
}
