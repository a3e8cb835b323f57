//! Outcome metrics using the metrics crate facade.
//!
//! Recorded metrics can be exported to any backend installed as the global
//! recorder (Prometheus, `StatsD`, etc.).

use std::time::Duration;

use netresponse_core::OutcomeKind;

/// Label used for metrics.
const LABEL_OUTCOME: &str = "outcome";

/// Metric names.
const METRIC_OUTCOMES_TOTAL: &str = "netresponse_outcomes_total";
const METRIC_CALL_DURATION: &str = "netresponse_call_duration_seconds";

/// Record a classified outcome.
///
/// - `netresponse_outcomes_total` (counter): calls, labeled by outcome
/// - `netresponse_call_duration_seconds` (histogram): call duration, labeled by outcome
pub(crate) fn record_outcome(kind: OutcomeKind, elapsed: Duration) {
    metrics::counter!(METRIC_OUTCOMES_TOTAL, LABEL_OUTCOME => kind.as_str()).increment(1);
    metrics::histogram!(METRIC_CALL_DURATION, LABEL_OUTCOME => kind.as_str())
        .record(elapsed.as_secs_f64());
}
