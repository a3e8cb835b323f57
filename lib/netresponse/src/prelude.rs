//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use netresponse::prelude::*;
//! ```

pub use crate::{
    AdapterConfig, Converter, Error, HttpClient, JsonConverter, LogLevel, NetworkResponse,
    NetworkResponseAdapter, NetworkResponseLayer, OutcomeKind, Response, Result, StatusCode,
    TextConverter, UnitConverter, adapt, header,
};
pub use serde::{Deserialize, Serialize};
