//! Transport trait.
//!
//! The crate never opens connections itself. [`HttpClient`] is the seam
//! where an existing HTTP stack plugs in: it executes a request and either
//! returns the buffered response or raises an [`crate::Error`].

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;

use crate::{Response, Result};

/// Core HTTP client trait.
///
/// Implementations should report non-2xx statuses as a normal [`Response`].
/// Stacks that raise on such statuses should use [`crate::Error::Http`] and
/// keep the response, so the outcome can still be classified as a server
/// error.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// use bytes::Bytes;
/// use netresponse_core::{HttpClient, Response, Result};
///
/// struct Canned;
///
/// impl HttpClient for Canned {
///     async fn execute(&self, _request: http::Request<Bytes>) -> Result<Response> {
///         Ok(Response::new(200, HashMap::new(), Bytes::from("ok")))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    /// - HTTP errors raised by the transport itself
    fn execute(
        &self,
        request: http::Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

impl<C: HttpClient + ?Sized> HttpClient for Arc<C> {
    fn execute(
        &self,
        request: http::Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        (**self).execute(request)
    }
}
