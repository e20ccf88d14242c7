//! Failure type of the profile API client.

use std::fmt;

use devlink_types::ProfileError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// One entry of a `{"errors": [...]}` validation body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ValidationError>,
}

/// A request that did not produce the expected response.
///
/// `status` is `0` when the request never got a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub status_text: String,
    /// Structured field errors reported by the server, in body order
    pub errors: Vec<ValidationError>,
}

impl ApiError {
    /// Creates an error from a non-success response and its body.
    pub fn http_status(status: StatusCode, body: &str) -> Self {
        let errors = serde_json::from_str::<ErrorBody>(body)
            .map(|parsed| parsed.errors)
            .unwrap_or_default();
        Self {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            errors,
        }
    }

    /// Creates an error for a request that never got a response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            status_text: message.into(),
            errors: Vec::new(),
        }
    }

    /// Creates an error for a success response whose body could not be decoded.
    pub fn invalid_body(status: StatusCode) -> Self {
        Self {
            status: status.as_u16(),
            status_text: "Invalid response body".to_string(),
            errors: Vec::new(),
        }
    }

    /// Payload stored by the profile slice for this failure.
    pub fn to_payload(&self) -> ProfileError {
        ProfileError {
            msg: self.status_text.clone(),
            status: self.status,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == 0 {
            write!(f, "{}", self.status_text)
        } else {
            write!(f, "HTTP {} {}", self.status, self.status_text)
        }
    }
}

impl std::error::Error for ApiError {}

/// Maps a reqwest failure (no usable response) to an [`ApiError`].
pub(crate) fn classify_reqwest_error(e: &reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::transport(format!("Request timed out: {e}"))
    } else if e.is_connect() {
        ApiError::transport(format!("Connection failed: {e}"))
    } else if e.is_request() {
        ApiError::transport(format!("Request error: {e}"))
    } else {
        ApiError::transport(format!("Network error: {e}"))
    }
}

/// Result type for profile API calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
