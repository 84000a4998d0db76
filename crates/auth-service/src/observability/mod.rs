//! Observability helpers for the auth service.
//!
//! Tracing is initialized in `main`; this module holds the metric
//! recording functions used by the service layer.

pub mod metrics;
