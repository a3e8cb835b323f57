//! Outcome logging.
//!
//! Events go through the `tracing` facade. Each call runs inside a
//! `network_call` span; the outcome is logged once the call is classified.

use std::time::Duration;

use bytes::Bytes;
use tracing::{Level, Span, debug, info, span, warn};

use crate::{LogLevel, NetworkResponse};

/// Span wrapping a single call.
pub(crate) fn call_span(request: &http::Request<Bytes>) -> Span {
    let method = request.method();
    let uri = request.uri();
    span!(Level::INFO, "network_call", %method, %uri)
}

/// Log a classified outcome.
///
/// Network and unknown errors are logged at warn regardless of `level`,
/// unless logging is off.
pub(crate) fn log_outcome<S, E>(level: LogLevel, outcome: &NetworkResponse<S, E>, elapsed: Duration) {
    if level == LogLevel::Off {
        return;
    }

    // Saturating conversion to u64 (truncates after ~584 million years)
    let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    let kind = outcome.kind().as_str();
    let status = outcome.status();

    if let Some(err) = outcome.failure() {
        warn!(outcome = kind, error = %err, elapsed_ms, "call failed");
        return;
    }

    match level {
        LogLevel::Debug => debug!(outcome = kind, ?status, elapsed_ms, "call completed"),
        LogLevel::Info => info!(outcome = kind, ?status, elapsed_ms, "call completed"),
        LogLevel::Off => {}
    }
}
