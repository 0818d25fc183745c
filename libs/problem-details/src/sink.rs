//! HTTP response sinks
//!
//! A `ResponseSink` is whatever eventually puts bytes on the wire. This crate
//! only needs to set a header, set the status line and stream a body; how the
//! sink flushes or chunks is up to it.

use std::io::Write;

use http::{HeaderMap, HeaderName, HeaderValue, Response, StatusCode};

/// Converts an integer into an `http` status code, if it is representable.
pub(crate) fn http_status(code: i32) -> Option<StatusCode> {
    u16::try_from(code)
        .ok()
        .and_then(|c| StatusCode::from_u16(c).ok())
}

/// Status to use when a sink cannot represent the requested one.
fn coerce_status(code: i32) -> StatusCode {
    http_status(code).unwrap_or_else(|| {
        tracing::warn!(
            status = code,
            "status code is not representable, using 500 instead"
        );
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// The HTTP response collaborator a problem is written to.
pub trait ResponseSink {
    type Body: Write;

    /// Set (replace) a response header.
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Set the response status line. Any integer may be passed.
    fn set_status(&mut self, status: i32);

    /// Writer receiving the response body.
    fn body_writer(&mut self) -> &mut Self::Body;
}

/// In-memory sink that records everything written to it.
///
/// The status stays `None` until set; converting to an `http::Response`
/// treats an unset status as 200.
#[derive(Debug, Default, Clone)]
pub struct ResponseRecorder {
    status: Option<i32>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> Option<i32> {
        self.status
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header value as a string, if present and visible ASCII.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Build an `http::Response` from what was recorded.
    #[must_use]
    pub fn into_response(self) -> Response<Vec<u8>> {
        let status = self.status.map_or(StatusCode::OK, coerce_status);
        let mut resp = Response::new(self.body);
        *resp.status_mut() = status;
        *resp.headers_mut() = self.headers;
        resp
    }
}

impl ResponseSink for ResponseRecorder {
    type Body = Vec<u8>;

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    fn set_status(&mut self, status: i32) {
        self.status = Some(status);
    }

    fn body_writer(&mut self) -> &mut Vec<u8> {
        &mut self.body
    }
}

impl ResponseSink for Response<Vec<u8>> {
    type Body = Vec<u8>;

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }

    fn set_status(&mut self, status: i32) {
        *self.status_mut() = coerce_status(status);
    }

    fn body_writer(&mut self) -> &mut Vec<u8> {
        self.body_mut()
    }
}
