//! Transport collaborator boundary.
//!
//! The core never performs HTTP itself. The embedding application supplies
//! a [`Transport`] implementation; the core hands it a method, a path, the
//! current bearer token, and an optional JSON body, and gets back either
//! the decoded JSON payload or an [`ApiError`] in the backend's error
//! shape.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::fmt;

/// Path of the current-user resource.
pub const ME_PATH: &str = "/api/me";

/// HTTP method for a transport request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read a resource.
    Get,
    /// Create a resource.
    Post,
    /// Replace a resource.
    Put,
    /// Remove a resource.
    Delete,
}

impl Method {
    /// Returns the wire name of the method.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned by the transport collaborator.
///
/// `status` is the HTTP status of the failed response, or `0` for a
/// network-level failure where no response arrived at all.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status, `0` for network-level failure.
    pub status: u16,
    /// Human-readable failure description.
    pub message: String,
    /// Structured error body from the backend, if any.
    pub data: Option<JsonValue>,
}

impl ApiError {
    /// Creates an error for a response with the given status.
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }

    /// Creates a network-level error (status `0`, no response arrived).
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(0, message)
    }

    /// Attaches the structured error body from the backend.
    #[must_use]
    pub fn with_data(mut self, data: JsonValue) -> Self {
        self.data = Some(data);
        self
    }

    /// Returns true if this is a network-level failure.
    #[must_use]
    pub fn is_network(&self) -> bool {
        self.status == 0
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_network() {
            write!(f, "network error: {}", self.message)
        } else {
            write!(f, "request failed with status {}: {}", self.status, self.message)
        }
    }
}

impl std::error::Error for ApiError {}

/// Trait for the backend transport.
///
/// Implementations attach the bearer token as an `Authorization` header
/// when one is supplied and decode the response body as JSON.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a request against the backend API.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for network-level failures (status `0`) and
    /// non-success responses alike.
    async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<JsonValue>,
    ) -> Result<JsonValue, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_wire_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn network_error_has_status_zero() {
        let err = ApiError::network("connection refused");
        assert_eq!(err.status, 0);
        assert!(err.is_network());
        assert!(err.to_string().contains("network error"));
    }

    #[test]
    fn server_error_display_includes_status() {
        let err = ApiError::new(401, "unauthorized");
        assert!(!err.is_network());
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn error_carries_structured_body() {
        let err =
            ApiError::new(422, "validation failed").with_data(serde_json::json!({"field": "email"}));
        assert_eq!(err.data, Some(serde_json::json!({"field": "email"})));
    }
}
