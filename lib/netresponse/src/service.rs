//! Tower integration.
//!
//! [`NetworkResponseLayer`] wraps a transport service
//! (`Service<http::Request<Bytes>, Response = Response, Error = Error>`) into
//! a [`NetworkResponseService`] whose response is a [`NetworkResponse`] and
//! whose error type is [`Infallible`].

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use bytes::Bytes;
use tower::Layer;
use tower_service::Service;
use tracing::Instrument;

use crate::{AdapterConfig, Converter, Error, NetworkResponse, Response, adapt, logging};

/// Layer producing [`NetworkResponseService`]s.
///
/// # Example
///
/// ```ignore
/// use netresponse::{JsonConverter, NetworkResponseLayer};
/// use tower::ServiceBuilder;
///
/// let service = ServiceBuilder::new()
///     .layer(NetworkResponseLayer::new(
///         JsonConverter::<User>::new(),
///         JsonConverter::<ApiError>::new(),
///     ))
///     .service(transport);
/// ```
#[derive(Debug)]
pub struct NetworkResponseLayer<SC, EC> {
    success: Arc<SC>,
    error: Arc<EC>,
    config: AdapterConfig,
}

impl<SC, EC> Clone for NetworkResponseLayer<SC, EC> {
    fn clone(&self) -> Self {
        Self {
            success: Arc::clone(&self.success),
            error: Arc::clone(&self.error),
            config: self.config.clone(),
        }
    }
}

impl<SC, EC> NetworkResponseLayer<SC, EC> {
    /// Create a layer with the default configuration.
    pub fn new(success: SC, error: EC) -> Self {
        Self::with_config(success, error, AdapterConfig::default())
    }

    /// Create a layer with an explicit configuration.
    pub fn with_config(success: SC, error: EC, config: AdapterConfig) -> Self {
        Self {
            success: Arc::new(success),
            error: Arc::new(error),
            config,
        }
    }
}

impl<S, SC, EC> Layer<S> for NetworkResponseLayer<SC, EC> {
    type Service = NetworkResponseService<S, SC, EC>;

    fn layer(&self, inner: S) -> Self::Service {
        NetworkResponseService {
            inner,
            success: Arc::clone(&self.success),
            error: Arc::clone(&self.error),
            config: self.config.clone(),
            not_ready: None,
        }
    }
}

/// Service classifying every call of the wrapped transport.
#[derive(Debug)]
pub struct NetworkResponseService<S, SC, EC> {
    inner: S,
    success: Arc<SC>,
    error: Arc<EC>,
    config: AdapterConfig,
    not_ready: Option<Error>,
}

impl<S: Clone, SC, EC> Clone for NetworkResponseService<S, SC, EC> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            success: Arc::clone(&self.success),
            error: Arc::clone(&self.error),
            config: self.config.clone(),
            not_ready: None,
        }
    }
}

impl<S, SC, EC> NetworkResponseService<S, SC, EC> {
    /// Create a service wrapping `inner` with the default configuration.
    pub fn new(inner: S, success: SC, error: EC) -> Self {
        NetworkResponseLayer::new(success, error).layer(inner)
    }

    /// Get a reference to the wrapped transport.
    pub const fn get_ref(&self) -> &S {
        &self.inner
    }
}

impl<S, SC, EC> Service<http::Request<Bytes>> for NetworkResponseService<S, SC, EC>
where
    S: Service<http::Request<Bytes>, Response = Response, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
    SC: Converter + 'static,
    SC::Output: Send + 'static,
    EC: Converter + 'static,
    EC::Output: Send + 'static,
{
    type Response = NetworkResponse<SC::Output, EC::Output>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Infallible>> {
        if self.not_ready.is_some() {
            return Poll::Ready(Ok(()));
        }

        // A transport that cannot accept calls fails the next call instead
        match self.inner.poll_ready(cx) {
            Poll::Ready(Ok(())) => Poll::Ready(Ok(())),
            Poll::Ready(Err(err)) => {
                self.not_ready = Some(err);
                Poll::Ready(Ok(()))
            }
            Poll::Pending => Poll::Pending,
        }
    }

    fn call(&mut self, request: http::Request<Bytes>) -> Self::Future {
        let span = logging::call_span(&request);
        let success = Arc::clone(&self.success);
        let error = Arc::clone(&self.error);
        let config = self.config.clone();

        if let Some(failure) = self.not_ready.take() {
            return Box::pin(
                async move {
                    let call = async { Err::<Response, _>(failure) };
                    let outcome = adapt(call, &*success, &*error, &config).await;
                    Ok::<_, Infallible>(outcome)
                }
                .instrument(span),
            );
        }

        // Call the instance that was driven to readiness
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(
            async move {
                let outcome = adapt(inner.call(request), &*success, &*error, &config).await;
                Ok::<_, Infallible>(outcome)
            }
            .instrument(span),
        )
    }
}
