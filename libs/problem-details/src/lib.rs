//! RFC 7807 problem details for HTTP APIs
//!
//! This crate provides:
//! - the `ProblemDetails` payload with presence-aware optional members
//! - a lookup from HTTP status codes to the RFC section defining them
//! - the `ResponseSink` seam used to emit a problem as an HTTP response
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod problem;
pub mod reference;
pub mod sink;

pub use error::ProblemError;
pub use problem::{
    APPLICATION_PROBLEM_JSON, APPLICATION_PROBLEM_JSON_UTF8, ProblemDetails, bad_request,
    conflict, internal_error, not_found,
};
pub use reference::status_reference;
pub use sink::{ResponseRecorder, ResponseSink};
