//! Core types for classifying HTTP call outcomes.
//!
//! A network call ends either with a response or with a failure. This crate
//! turns both into a single [`NetworkResponse`] that callers `match` on:
//! - [`NetworkResponse`] and [`OutcomeKind`] - The four-way outcome
//! - [`classify_response`] - Classify a completed call
//! - [`classify_failure`] - Classify a raised failure
//! - [`Converter`] - Decode body bytes into typed values
//! - [`Response`] and [`CallResponse`] - Raw and decoded responses
//! - [`Error`] and [`Result`] - Failure taxonomy
//! - [`HttpClient`] - Transport seam
//! - [`StatusCode`] - HTTP status codes (re-exported from `http` crate)
//! - [`header`] - HTTP header names (re-exported from `http` crate)

mod classify;
mod client;
mod converter;
mod error;
mod network_response;
pub mod prelude;
mod response;

pub use classify::{classify_failure, classify_response, decode_error_body};
pub use client::HttpClient;
pub use converter::{
    BytesConverter, Converter, FnConverter, JsonConverter, TextConverter, UnitConverter,
    converter_fn, from_json,
};
pub use error::{Error, Result};
pub use network_response::{NetworkResponse, OutcomeKind};
pub use response::{CallResponse, Response};

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
