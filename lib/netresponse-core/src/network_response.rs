//! The exhaustive outcome of a network call.

use std::collections::HashMap;
use std::fmt;

use derive_more::Display;

use crate::{Error, Response};

/// Outcome of a single network call.
///
/// Exactly one variant is produced per call. Callers branch with `match`
/// instead of handling errors:
///
/// ```
/// use netresponse_core::NetworkResponse;
///
/// fn describe(outcome: &NetworkResponse<String, String>) -> String {
///     match outcome {
///         NetworkResponse::Success { body, .. } => format!("ok: {body:?}"),
///         NetworkResponse::ServerError { body, .. } => format!("server said: {body:?}"),
///         NetworkResponse::NetworkError(err) => format!("offline: {err}"),
///         NetworkResponse::UnknownError(err) => format!("unexpected: {err}"),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkResponse<S, E> {
    /// The call completed with a 2xx status.
    Success {
        /// Decoded success body, `None` when the response had no content.
        body: Option<S>,
        /// Raw response, kept for headers and status.
        response: Response,
    },

    /// The call completed with a non-2xx status.
    ///
    /// `body` is `None` when no error body was sent. `response` is `None`
    /// when the failure did not retain the response it wrapped.
    ServerError {
        /// Decoded error payload.
        body: Option<E>,
        /// Raw response, kept for headers and status.
        response: Option<Response>,
    },

    /// The round trip never completed (connectivity, TLS, timeout, I/O).
    NetworkError(Error),

    /// Any other failure, including an error body that failed to decode.
    UnknownError(Error),
}

/// Variant tag of a [`NetworkResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum OutcomeKind {
    /// See [`NetworkResponse::Success`].
    #[display("success")]
    Success,
    /// See [`NetworkResponse::ServerError`].
    #[display("server_error")]
    ServerError,
    /// See [`NetworkResponse::NetworkError`].
    #[display("network_error")]
    NetworkError,
    /// See [`NetworkResponse::UnknownError`].
    #[display("unknown_error")]
    UnknownError,
}

impl OutcomeKind {
    /// Label used in logs and metrics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::ServerError => "server_error",
            Self::NetworkError => "network_error",
            Self::UnknownError => "unknown_error",
        }
    }

    /// Returns `true` for every kind but [`OutcomeKind::Success`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !matches!(self, Self::Success)
    }
}

impl<S, E> NetworkResponse<S, E> {
    /// Variant tag.
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Success { .. } => OutcomeKind::Success,
            Self::ServerError { .. } => OutcomeKind::ServerError,
            Self::NetworkError(_) => OutcomeKind::NetworkError,
            Self::UnknownError(_) => OutcomeKind::UnknownError,
        }
    }

    /// Returns `true` for [`NetworkResponse::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns `true` for any of the three error variants.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Raw response, when one was retained.
    #[must_use]
    pub const fn response(&self) -> Option<&Response> {
        match self {
            Self::Success { response, .. } => Some(response),
            Self::ServerError { response, .. } => response.as_ref(),
            Self::NetworkError(_) | Self::UnknownError(_) => None,
        }
    }

    /// HTTP status code, when a response was retained.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response().map(Response::status)
    }

    /// Response headers, when a response was retained.
    #[must_use]
    pub fn headers(&self) -> Option<&HashMap<String, String>> {
        self.response().map(Response::headers)
    }

    /// Single header value by name, when a response was retained.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.response().and_then(|response| response.header(name))
    }

    /// Decoded success body.
    #[must_use]
    pub const fn body(&self) -> Option<&S> {
        match self {
            Self::Success { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Decoded error payload.
    #[must_use]
    pub const fn error_body(&self) -> Option<&E> {
        match self {
            Self::ServerError { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Underlying failure for network and unknown errors.
    #[must_use]
    pub const fn failure(&self) -> Option<&Error> {
        match self {
            Self::NetworkError(err) | Self::UnknownError(err) => Some(err),
            _ => None,
        }
    }

    /// Converts into a standard `Result`, keeping the error variants intact.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged for any error variant.
    pub fn into_result(self) -> Result<Option<S>, Self> {
        match self {
            Self::Success { body, .. } => Ok(body),
            other => Err(other),
        }
    }

    /// Transform the success body.
    pub fn map<F, S2>(self, f: F) -> NetworkResponse<S2, E>
    where
        F: FnOnce(S) -> S2,
    {
        match self {
            Self::Success { body, response } => NetworkResponse::Success {
                body: body.map(f),
                response,
            },
            Self::ServerError { body, response } => NetworkResponse::ServerError { body, response },
            Self::NetworkError(err) => NetworkResponse::NetworkError(err),
            Self::UnknownError(err) => NetworkResponse::UnknownError(err),
        }
    }

    /// Transform the error payload.
    pub fn map_error<F, E2>(self, f: F) -> NetworkResponse<S, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success { body, response } => NetworkResponse::Success { body, response },
            Self::ServerError { body, response } => NetworkResponse::ServerError {
                body: body.map(f),
                response,
            },
            Self::NetworkError(err) => NetworkResponse::NetworkError(err),
            Self::UnknownError(err) => NetworkResponse::UnknownError(err),
        }
    }
}

impl<S, E> fmt::Display for NetworkResponse<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { response, .. } => write!(f, "success ({})", response.status()),
            Self::ServerError {
                response: Some(response),
                ..
            } => write!(f, "server error ({})", response.status()),
            Self::ServerError { response: None, .. } => f.write_str("server error"),
            Self::NetworkError(err) => write!(f, "network error: {err}"),
            Self::UnknownError(err) => write!(f, "unknown error: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use bytes::Bytes;

    use super::*;

    fn response(status: u16) -> Response {
        let mut headers = HashMap::new();
        headers.insert("x-trace".to_string(), "t-1".to_string());
        Response::new(status, headers, Bytes::new())
    }

    #[test]
    fn success_accessors() {
        let outcome: NetworkResponse<u32, String> = NetworkResponse::Success {
            body: Some(3),
            response: response(200),
        };

        check!(outcome.kind() == OutcomeKind::Success);
        check!(outcome.is_success());
        check!(outcome.status() == Some(200));
        check!(outcome.header("x-trace") == Some("t-1"));
        check!(outcome.body() == Some(&3));
        check!(outcome.error_body().is_none());
        check!(outcome.failure().is_none());
    }

    #[test]
    fn server_error_without_response() {
        let outcome: NetworkResponse<u32, String> = NetworkResponse::ServerError {
            body: None,
            response: None,
        };

        check!(outcome.is_error());
        check!(outcome.status().is_none());
        check!(outcome.headers().is_none());
        insta::assert_snapshot!(outcome, @"server error");
    }

    #[test]
    fn failure_accessor() {
        let outcome: NetworkResponse<(), ()> = NetworkResponse::NetworkError(Error::Timeout);
        check!(outcome.failure() == Some(&Error::Timeout));
        check!(outcome.kind().is_error());
        insta::assert_snapshot!(outcome, @"network error: request timeout");
    }

    #[test]
    fn into_result() {
        let outcome: NetworkResponse<u32, String> = NetworkResponse::Success {
            body: None,
            response: response(204),
        };
        check!(outcome.into_result() == Ok(None));

        let outcome: NetworkResponse<u32, String> =
            NetworkResponse::UnknownError(Error::decode("bad"));
        let_assert!(Err(NetworkResponse::UnknownError(err)) = outcome.into_result());
        check!(err == Error::decode("bad"));
    }

    #[test]
    fn map_and_map_error() {
        let outcome: NetworkResponse<u32, String> = NetworkResponse::Success {
            body: Some(2),
            response: response(200),
        };
        check!(outcome.map(|n| n * 10).body() == Some(&20));

        let outcome: NetworkResponse<u32, String> = NetworkResponse::ServerError {
            body: Some("oops".to_string()),
            response: Some(response(500)),
        };
        let mapped = outcome.map_error(|s| s.len());
        check!(mapped.error_body() == Some(&4));
        check!(mapped.status() == Some(500));
        insta::assert_snapshot!(mapped, @"server error (500)");
    }

    #[test]
    fn outcome_kind_labels() {
        check!(OutcomeKind::Success.as_str() == "success");
        check!(OutcomeKind::ServerError.to_string() == "server_error");
        check!(OutcomeKind::NetworkError.as_str() == "network_error");
        check!(OutcomeKind::UnknownError.to_string() == "unknown_error");
        check!(!OutcomeKind::Success.is_error());
    }
}
