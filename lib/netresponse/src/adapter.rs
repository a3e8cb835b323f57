//! Call adapter.
//!
//! [`NetworkResponseAdapter`] drives an [`HttpClient`] and hands back a
//! [`NetworkResponse`] for every request. [`adapt`] does the same for a
//! single in-flight call.

use std::future::Future;
use std::time::Instant;

use bytes::Bytes;
use tracing::Instrument;

use crate::{
    AdapterConfig, CallResponse, Converter, Error, HttpClient, NetworkResponse, Response, Result,
    classify_failure, classify_response, logging,
};

/// Classify the raw result of a call.
///
/// The success body is decoded first; a decoding failure is classified like
/// any other raised failure, which makes it an `UnknownError`.
pub fn resolve<SC, EC>(
    result: Result<Response>,
    success: &SC,
    error: &EC,
    empty_body_as_none: bool,
) -> NetworkResponse<SC::Output, EC::Output>
where
    SC: Converter + ?Sized,
    EC: Converter + ?Sized,
{
    match result.and_then(|raw| CallResponse::decode(raw, success, empty_body_as_none)) {
        Ok(call) => classify_response(call, error),
        Err(failure) => classify_failure(failure, error),
    }
}

/// Await a call and classify its outcome.
///
/// When `config.timeout` is set the call runs under `tokio::time::timeout`,
/// which needs a Tokio runtime with the time driver enabled.
///
/// # Example
///
/// ```ignore
/// let outcome = adapt(
///     transport.execute(request),
///     &JsonConverter::<User>::new(),
///     &JsonConverter::<ApiError>::new(),
///     &AdapterConfig::default(),
/// )
/// .await;
/// ```
pub async fn adapt<F, SC, EC>(
    call: F,
    success: &SC,
    error: &EC,
    config: &AdapterConfig,
) -> NetworkResponse<SC::Output, EC::Output>
where
    F: Future<Output = Result<Response>>,
    SC: Converter + ?Sized,
    EC: Converter + ?Sized,
{
    let start = Instant::now();

    let result = match config.timeout {
        Some(timeout) => tokio::time::timeout(timeout, call)
            .await
            .unwrap_or(Err(Error::Timeout)),
        None => call.await,
    };

    let outcome = resolve(result, success, error, config.empty_body_as_none);
    let elapsed = start.elapsed();

    logging::log_outcome(config.log_level, &outcome, elapsed);
    #[cfg(feature = "metrics")]
    crate::metrics::record_outcome(outcome.kind(), elapsed);

    outcome
}

/// Adapter turning an [`HttpClient`] into a source of [`NetworkResponse`]s.
///
/// `SC` decodes 2xx bodies, `EC` decodes error bodies.
///
/// # Example
///
/// ```ignore
/// use netresponse::{JsonConverter, NetworkResponse, NetworkResponseAdapter};
///
/// let api = NetworkResponseAdapter::new(
///     transport,
///     JsonConverter::<User>::new(),
///     JsonConverter::<ApiError>::new(),
/// );
///
/// match api.execute(request).await {
///     NetworkResponse::Success { body, .. } => println!("user: {body:?}"),
///     NetworkResponse::ServerError { body, .. } => println!("rejected: {body:?}"),
///     NetworkResponse::NetworkError(err) => println!("offline: {err}"),
///     NetworkResponse::UnknownError(err) => println!("bug: {err}"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NetworkResponseAdapter<C, SC, EC> {
    client: C,
    success: SC,
    error: EC,
    config: AdapterConfig,
}

impl<C, SC, EC> NetworkResponseAdapter<C, SC, EC> {
    /// Create an adapter with the default configuration.
    pub fn new(client: C, success: SC, error: EC) -> Self {
        Self::with_config(client, success, error, AdapterConfig::default())
    }

    /// Create an adapter with an explicit configuration.
    pub const fn with_config(client: C, success: SC, error: EC, config: AdapterConfig) -> Self {
        Self {
            client,
            success,
            error,
            config,
        }
    }

    /// Get a reference to the underlying transport.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Get the adapter configuration.
    #[must_use]
    pub const fn config(&self) -> &AdapterConfig {
        &self.config
    }
}

impl<C, SC, EC> NetworkResponseAdapter<C, SC, EC>
where
    C: HttpClient,
    SC: Converter,
    EC: Converter,
{
    /// Execute `request` and classify the outcome.
    ///
    /// Never fails: every failure ends up in one of the error variants.
    pub async fn execute(
        &self,
        request: http::Request<Bytes>,
    ) -> NetworkResponse<SC::Output, EC::Output> {
        let span = logging::call_span(&request);
        adapt(
            self.client.execute(request),
            &self.success,
            &self.error,
            &self.config,
        )
        .instrument(span)
        .await
    }
}
