//! Error types for the rukunos-access crate.
//!
//! Every failure here is recoverable locally: none of them escalate to
//! automatic session termination. Only an explicit logout clears session
//! state, so callers may retry freely while the session stays usable in
//! its last-known-good state.

use crate::transport::ApiError;
use std::fmt;

/// Errors from session store writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// An empty token was supplied to `set_token`. The previously stored
    /// token is untouched.
    InvalidTokenWrite,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTokenWrite => {
                write!(f, "refusing to store an empty bearer token")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Errors from the current-user refresh.
///
/// Whatever the variant, the session is left untouched: a failed refresh
/// is never treated as proof that the session itself is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshError {
    /// Transport-level failure before any response arrived.
    Network { message: String },
    /// The backend answered with a non-success status.
    Server { status: u16, message: String },
    /// The current-user payload could not be decoded.
    Payload { message: String },
}

impl fmt::Display for RefreshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network { message } => {
                write!(f, "network failure while refreshing current user: {message}")
            }
            Self::Server { status, message } => {
                write!(f, "current-user request failed with status {status}: {message}")
            }
            Self::Payload { message } => {
                write!(f, "current-user payload could not be decoded: {message}")
            }
        }
    }
}

impl std::error::Error for RefreshError {}

impl From<ApiError> for RefreshError {
    fn from(err: ApiError) -> Self {
        if err.is_network() {
            Self::Network {
                message: err.message,
            }
        } else {
            Self::Server {
                status: err.status,
                message: err.message,
            }
        }
    }
}
