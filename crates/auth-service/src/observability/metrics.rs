//! Metrics definitions for the auth service.
//!
//! Metrics follow Prometheus naming conventions: `auth_` prefix and
//! `_total` suffix for counters.
//!
//! # Cardinality
//!
//! Labels are bounded to prevent cardinality explosion:
//! - `operation`: 2 values (signup, login)
//! - `status`: small fixed set per operation (success, conflict, error,
//!   unknown_email, bad_password)

use metrics::counter;

/// Record the outcome of an authentication operation.
///
/// Metric: `auth_attempts_total`
/// Labels: `operation`, `status`
pub fn record_auth_attempt(operation: &str, status: &str) {
    counter!(
        "auth_attempts_total",
        "operation" => operation.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}
