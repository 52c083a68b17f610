//! HTTP middleware for request processing.
//!
//! Provides response header policy and observability middleware.

pub mod headers;
pub mod tracing;
