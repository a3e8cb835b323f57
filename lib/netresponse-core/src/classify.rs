//! Outcome classification.
//!
//! Two entry points cover every way a call can end:
//! - [`classify_response`] for a call that produced a response,
//! - [`classify_failure`] for a call that raised an [`Error`].
//!
//! Both are pure and total: they never panic and never return an error.

use bytes::Bytes;

use crate::{CallResponse, Converter, Error, NetworkResponse, Result};

/// Classify a completed call.
///
/// - 2xx: `Success` with the decoded body, which may be `None`.
/// - otherwise, no error body: `ServerError` with no payload.
/// - otherwise, decodable error body: `ServerError` with the payload.
/// - otherwise, undecodable error body: `UnknownError` with the converter's error.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// use bytes::Bytes;
/// use netresponse_core::{CallResponse, NetworkResponse, Response, TextConverter, classify_response};
///
/// let raw = Response::new(503, HashMap::new(), Bytes::from("maintenance"));
/// let outcome = classify_response::<(), _>(CallResponse::error(raw), &TextConverter);
///
/// assert_eq!(outcome.error_body().map(String::as_str), Some("maintenance"));
/// ```
pub fn classify_response<S, C>(
    response: CallResponse<S>,
    converter: &C,
) -> NetworkResponse<S, C::Output>
where
    C: Converter + ?Sized,
{
    if response.is_success() {
        let (response, body) = response.into_parts();
        return NetworkResponse::Success { body, response };
    }

    match decode_error_body(response.error_body(), converter) {
        Ok(body) => NetworkResponse::ServerError {
            body,
            response: Some(response.into_parts().0),
        },
        Err(err) => NetworkResponse::UnknownError(err),
    }
}

/// Decode an optional raw error body.
///
/// Absent bytes yield `Ok(None)` without touching the converter. Converter
/// failures are returned as-is so the caller can route them.
pub fn decode_error_body<C>(raw: Option<&Bytes>, converter: &C) -> Result<Option<C::Output>>
where
    C: Converter + ?Sized,
{
    raw.map(|bytes| converter.convert(bytes)).transpose()
}

/// Classify a failed call.
///
/// - transport failures ([`Error::is_network`]): `NetworkError`.
/// - [`Error::Http`] with a response: the response is classified with
///   [`classify_response`]; a `ServerError` result is returned as-is, any
///   other result falls back to `ServerError` with neither payload nor
///   response.
/// - [`Error::Http`] without a response: `ServerError` with neither payload
///   nor response.
/// - anything else: `UnknownError` holding the original failure.
///
/// # Example
///
/// ```
/// use netresponse_core::{Error, NetworkResponse, UnitConverter, classify_failure};
///
/// let outcome = classify_failure::<(), _>(Error::Timeout, &UnitConverter);
/// assert_eq!(outcome, NetworkResponse::NetworkError(Error::Timeout));
/// ```
pub fn classify_failure<S, C>(failure: Error, converter: &C) -> NetworkResponse<S, C::Output>
where
    C: Converter + ?Sized,
{
    if failure.is_network() {
        return NetworkResponse::NetworkError(failure);
    }

    match failure {
        Error::Http {
            response: Some(response),
            ..
        } => match classify_response(CallResponse::<S>::error(response), converter) {
            server_error @ NetworkResponse::ServerError { .. } => server_error,
            _ => NetworkResponse::ServerError {
                body: None,
                response: None,
            },
        },
        Error::Http { response: None, .. } => NetworkResponse::ServerError {
            body: None,
            response: None,
        },
        other => NetworkResponse::UnknownError(other),
    }
}
