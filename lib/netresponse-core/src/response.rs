//! HTTP response handling.
//!
//! [`Response`] is the raw, buffered response a transport hands back: status,
//! headers and body bytes. It is the metadata retained by `Success` and
//! `ServerError` outcomes.
//!
//! [`CallResponse`] is the same response after the success body went through
//! a converter, which is the shape the response classifier works on.

use std::collections::HashMap;

use bytes::Bytes;

use crate::Converter;

// ============================================================================
// Raw Response
// ============================================================================

/// HTTP response with status, headers, and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response<B = Bytes> {
    status: u16,
    headers: HashMap<String, String>,
    body: B,
}

impl<B> Response<B> {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: B) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Consume into body.
    #[must_use]
    pub fn into_body(self) -> B {
        self.body
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }
}

impl From<http::Response<Bytes>> for Response<Bytes> {
    fn from(response: http::Response<Bytes>) -> Self {
        let (parts, body) = response.into_parts();
        // Non UTF-8 header values are dropped
        let headers = parts
            .headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect();

        Self::new(parts.status.as_u16(), headers, body)
    }
}

// ============================================================================
// Call Response
// ============================================================================

/// A completed call: the raw response plus its decoded success body.
///
/// The success body is only ever set for 2xx responses. For any other status
/// the raw body bytes are exposed through [`CallResponse::error_body`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResponse<S> {
    raw: Response,
    body: Option<S>,
}

impl<S> CallResponse<S> {
    /// Wraps a successful response and its already decoded body.
    ///
    /// A `body` passed for an unsuccessful response is discarded.
    #[must_use]
    pub fn success(raw: Response, body: Option<S>) -> Self {
        let body = if raw.is_success() { body } else { None };
        Self { raw, body }
    }

    /// Wraps an unsuccessful response.
    #[must_use]
    pub const fn error(raw: Response) -> Self {
        Self { raw, body: None }
    }

    /// Builds a call response, decoding the success body with `converter`.
    ///
    /// Statuses 204 and 205 never carry a body. Other 2xx responses with an
    /// empty body yield `None` when `empty_body_as_none` is set.
    ///
    /// # Errors
    ///
    /// Returns the converter's error when a 2xx body fails to decode.
    pub fn decode<C>(raw: Response, converter: &C, empty_body_as_none: bool) -> crate::Result<Self>
    where
        C: Converter<Output = S> + ?Sized,
    {
        if !raw.is_success() {
            return Ok(Self::error(raw));
        }

        let no_content = matches!(raw.status(), 204 | 205);
        let body = if no_content || (empty_body_as_none && raw.body().is_empty()) {
            None
        } else {
            Some(converter.convert(raw.body())?)
        };

        Ok(Self { raw, body })
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.raw.is_success()
    }

    /// Decoded success body, absent for unsuccessful or empty responses.
    #[must_use]
    pub const fn body(&self) -> Option<&S> {
        self.body.as_ref()
    }

    /// Raw error body bytes, present only for unsuccessful, non-empty responses.
    #[must_use]
    pub fn error_body(&self) -> Option<&Bytes> {
        if self.is_success() || self.raw.body().is_empty() {
            None
        } else {
            Some(self.raw.body())
        }
    }

    /// The underlying raw response.
    #[must_use]
    pub const fn raw(&self) -> &Response {
        &self.raw
    }

    /// Consume into (raw response, success body).
    #[must_use]
    pub fn into_parts(self) -> (Response, Option<S>) {
        (self.raw, self.body)
    }
}
