//! Integration tests for the tower layer.

#![allow(missing_docs)]

use std::collections::HashMap;
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::task::{Context, Poll};

use assert2::{check, let_assert};
use bytes::Bytes;
use netresponse::tower::{Layer, Service, ServiceBuilder, ServiceExt};
use netresponse::{
    AdapterConfig, Error, JsonConverter, LogLevel, NetworkResponse, NetworkResponseLayer,
    NetworkResponseService, Response, TextConverter, UnitConverter,
};

/// Mock transport that returns configurable responses.
#[derive(Clone)]
struct MockTransport {
    status: u16,
    body: &'static str,
    call_count: Arc<AtomicU32>,
    overloaded: Arc<AtomicBool>,
}

impl MockTransport {
    fn new(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            call_count: Arc::new(AtomicU32::new(0)),
            overloaded: Arc::new(AtomicBool::new(false)),
        }
    }

    fn overloaded(self) -> Self {
        self.overloaded.store(true, Ordering::SeqCst);
        self
    }

    fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Service<http::Request<Bytes>> for MockTransport {
    type Response = Response;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Error>> {
        if self.overloaded.load(Ordering::SeqCst) {
            Poll::Ready(Err(Error::connection("pool exhausted")))
        } else {
            Poll::Ready(Ok(()))
        }
    }

    fn call(&mut self, _request: http::Request<Bytes>) -> Self::Future {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let response = Response::new(self.status, HashMap::new(), Bytes::from_static(self.body.as_bytes()));
        Box::pin(async move { Ok(response) })
    }
}

fn create_request() -> http::Request<Bytes> {
    http::Request::post("https://example.com/orders")
        .body(Bytes::from(r#"{"sku":"A-1"}"#))
        .expect("valid request")
}

#[tokio::test]
async fn test_layer_success() {
    let mock = MockTransport::new(201, r#"{"order":7}"#);
    let mut service = ServiceBuilder::new()
        .layer(NetworkResponseLayer::new(
            JsonConverter::<serde_json::Value>::new(),
            UnitConverter,
        ))
        .service(mock.clone());

    let_assert!(Ok(ready) = service.ready().await);
    let_assert!(Ok(outcome) = ready.call(create_request()).await);

    check!(outcome.status() == Some(201));
    check!(outcome.body() == Some(&serde_json::json!({ "order": 7 })));
    check!(mock.call_count() == 1);
}

#[tokio::test]
async fn test_layer_server_error() {
    let mock = MockTransport::new(400, "sku unknown");
    let layer = NetworkResponseLayer::with_config(
        UnitConverter,
        TextConverter,
        AdapterConfig::builder().log_level(LogLevel::Off).build(),
    );
    let service = layer.layer(mock);

    let_assert!(Ok(outcome) = service.oneshot(create_request()).await);
    let_assert!(NetworkResponse::ServerError { body: Some(message), .. } = outcome);
    check!(message == "sku unknown");
}

#[tokio::test]
async fn test_not_ready_transport_becomes_network_error() {
    let mock = MockTransport::new(200, "").overloaded();
    let service = NetworkResponseService::new(mock.clone(), UnitConverter, UnitConverter);

    let result: Result<_, Infallible> = service.oneshot(create_request()).await;

    let_assert!(Ok(outcome) = result);
    check!(outcome == NetworkResponse::NetworkError(Error::connection("pool exhausted")));
    check!(mock.call_count() == 0);
}

#[tokio::test]
async fn test_service_multiple_requests() {
    let mock = MockTransport::new(204, "");
    let mut service = NetworkResponseService::new(mock.clone(), TextConverter, UnitConverter);

    for _ in 0..5 {
        let_assert!(Ok(ready) = service.ready().await);
        let_assert!(Ok(outcome) = ready.call(create_request()).await);
        let_assert!(NetworkResponse::Success { body: None, .. } = outcome);
    }

    check!(mock.call_count() == 5);
    check!(service.get_ref().call_count() == 5);
}
