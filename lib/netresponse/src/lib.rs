//! Turn any HTTP call into an exhaustive [`NetworkResponse`].
//!
//! A call either succeeds, is rejected by the server, never reaches the
//! server, or fails in some other way. This crate hands back exactly one of
//! those four outcomes and never an error, so call sites are a single
//! `match`.
//!
//! # Example
//!
//! ```ignore
//! use netresponse::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! #[derive(Debug, Deserialize)]
//! pub struct ApiError {
//!     code: String,
//! }
//!
//! let api = NetworkResponseAdapter::new(
//!     transport,
//!     JsonConverter::<User>::new(),
//!     JsonConverter::<ApiError>::new(),
//! );
//!
//! match api.execute(request).await {
//!     NetworkResponse::Success { body, .. } => println!("{body:?}"),
//!     NetworkResponse::ServerError { body, .. } => println!("{body:?}"),
//!     NetworkResponse::NetworkError(err) | NetworkResponse::UnknownError(err) => println!("{err}"),
//! }
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `metrics` | Records outcome counters and durations with the `metrics` crate |

mod adapter;
mod config;
mod logging;
#[cfg(feature = "metrics")]
mod metrics;
pub mod prelude;
mod service;

pub use adapter::{NetworkResponseAdapter, adapt, resolve};
pub use config::{AdapterConfig, AdapterConfigBuilder, LogLevel};
pub use service::{NetworkResponseLayer, NetworkResponseService};

// Re-export tower for service composition
pub use tower;

// Re-export core types
pub use netresponse_core::{
    BytesConverter, CallResponse, Converter, Error, FnConverter, HttpClient, JsonConverter,
    NetworkResponse, OutcomeKind, Response, Result, TextConverter, UnitConverter,
    classify_failure, classify_response, converter_fn, decode_error_body, from_json,
};

// Re-export http types for status codes and headers
pub use netresponse_core::{StatusCode, header};
