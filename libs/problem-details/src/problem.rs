//! RFC 7807 Problem Details for HTTP APIs

use http::StatusCode;
use http::header::{CONTENT_TYPE, HeaderValue};
use serde::{Deserialize, Serialize};

#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

use crate::error::ProblemError;
use crate::reference::status_reference;
use crate::sink::{ResponseSink, http_status};

/// Media type for Problem Details as per RFC 7807.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// `Content-Type` header value sent with every problem response.
pub const APPLICATION_PROBLEM_JSON_UTF8: &str = "application/problem+json; charset=utf-8";

const ABOUT_BLANK: &str = "about:blank";
const UNKNOWN_STATUS_TITLE: &str = "Unknown Status";

/// RFC 7807 Problem Details for HTTP APIs.
///
/// `type` and `title` are fixed at construction. The remaining members are
/// absent until set and absent members are left out of the JSON object
/// entirely, so an empty `detail` and no `detail` stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(
    feature = "utoipa",
    schema(
        title = "ProblemDetails",
        description = "RFC 7807 Problem Details for HTTP APIs"
    )
)]
#[must_use]
pub struct ProblemDetails {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    type_url: String,
    /// A short, human-readable summary of the problem type.
    title: String,
    /// The HTTP status code generated by the origin server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<i32>,
    /// A human-readable explanation specific to this occurrence of the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    /// A URI reference that identifies the specific occurrence of the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instance: Option<String>,
}

impl ProblemDetails {
    /// Create a problem with the required members. No validation is performed.
    pub fn new(type_url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            type_url: type_url.into(),
            title: title.into(),
            status: None,
            detail: None,
            instance: None,
        }
    }

    /// Create a problem describing an HTTP status code.
    ///
    /// The type is the RFC section defining `code` (or `about:blank` when the
    /// code is unregistered) and the title is its canonical reason phrase.
    pub fn from_status(code: i32) -> Self {
        let reference = status_reference(code);
        let type_url = if reference.is_empty() {
            ABOUT_BLANK
        } else {
            reference
        };
        let title = http_status(code)
            .and_then(|s| s.canonical_reason())
            .unwrap_or(UNKNOWN_STATUS_TITLE);

        Self::new(type_url, title).with_status(code)
    }

    #[must_use]
    pub fn type_url(&self) -> &str {
        &self.type_url
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn status(&self) -> Option<i32> {
        self.status
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    #[must_use]
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    /// Set the status member. Any integer is accepted.
    pub fn set_status(&mut self, status: i32) {
        self.status = Some(status);
    }

    pub fn set_detail(&mut self, detail: impl Into<String>) {
        self.detail = Some(detail.into());
    }

    pub fn set_instance(&mut self, uri: impl Into<String>) {
        self.instance = Some(uri.into());
    }

    pub fn with_status(mut self, status: i32) -> Self {
        self.set_status(status);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.set_detail(detail);
        self
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.set_instance(uri);
        self
    }

    /// Serialize into the `application/problem+json` wire form.
    ///
    /// # Errors
    /// Returns `ProblemError::Encoding` if serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, ProblemError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Write this problem to `sink` as an HTTP response with transport
    /// status `status`.
    ///
    /// The transport status may differ from the `status` member; an
    /// intermediary is allowed to change one without touching the other.
    /// Header and status are handed to the sink before the body, so they
    /// stay applied when writing the body fails.
    ///
    /// # Errors
    /// Returns `ProblemError::Encoding` if the body cannot be serialized or
    /// the sink rejects the write.
    pub fn respond_to<S: ResponseSink>(
        &self,
        sink: &mut S,
        status: i32,
    ) -> Result<(), ProblemError> {
        tracing::debug!(
            status,
            problem_type = %self.type_url,
            "writing problem details response"
        );

        sink.set_header(
            CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON_UTF8),
        );
        sink.set_status(status);
        serde_json::to_writer(sink.body_writer(), self)?;
        Ok(())
    }
}

pub fn bad_request(detail: impl Into<String>) -> ProblemDetails {
    ProblemDetails::from_status(i32::from(StatusCode::BAD_REQUEST.as_u16())).with_detail(detail)
}

pub fn not_found(detail: impl Into<String>) -> ProblemDetails {
    ProblemDetails::from_status(i32::from(StatusCode::NOT_FOUND.as_u16())).with_detail(detail)
}

pub fn conflict(detail: impl Into<String>) -> ProblemDetails {
    ProblemDetails::from_status(i32::from(StatusCode::CONFLICT.as_u16())).with_detail(detail)
}

pub fn internal_error(detail: impl Into<String>) -> ProblemDetails {
    ProblemDetails::from_status(i32::from(StatusCode::INTERNAL_SERVER_ERROR.as_u16()))
        .with_detail(detail)
}

/// Axum integration: make `ProblemDetails` directly usable as a response
///
/// The transport status follows the `status` member, falling back to 500
/// when it is absent or not a valid HTTP status.
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for ProblemDetails {
    fn into_response(self) -> axum::response::Response {
        let status = self
            .status
            .and_then(http_status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.to_json_bytes() {
            Ok(body) => (
                status,
                [(
                    CONTENT_TYPE,
                    HeaderValue::from_static(APPLICATION_PROBLEM_JSON_UTF8),
                )],
                body,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to encode problem details");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
