//! Telemetry metric name constants.
//!
//! Centralised metric names for scorecard operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `scorecard_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `kind` — report shape: "free" or "paid"
//! - `status` — outcome: "ok" or "error"
//! - `namespace` — cache key namespace, the text before the first `:`
//!   (e.g. "session", "survey-results", "user", "analytics")
//! - `reason` — eviction cause: "expired", "invalidated" or "cleared"

/// Total report generations requested through the orchestrator.
///
/// Labels: `kind` ("free" | "paid"), `status` ("ok" | "error").
pub const REPORTS_TOTAL: &str = "scorecard_reports_total";

/// Report generation duration in seconds, session resolve through render.
///
/// Labels: `kind`.
pub const REPORT_DURATION_SECONDS: &str = "scorecard_report_duration_seconds";

/// Total cache hits.
///
/// Labels: `namespace`.
pub const CACHE_HITS_TOTAL: &str = "scorecard_cache_hits_total";

/// Total cache misses. Expired entries count as misses.
///
/// Labels: `namespace`.
pub const CACHE_MISSES_TOTAL: &str = "scorecard_cache_misses_total";

/// Total cache entries removed.
///
/// Labels: `reason` ("expired" | "invalidated" | "cleared").
pub const CACHE_EVICTIONS_TOTAL: &str = "scorecard_cache_evictions_total";
