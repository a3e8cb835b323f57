//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use netresponse_core::prelude::*;
//! ```

pub use crate::{
    CallResponse, Converter, Error, HttpClient, JsonConverter, NetworkResponse, OutcomeKind,
    Response, Result, TextConverter, UnitConverter, classify_failure, classify_response,
};
