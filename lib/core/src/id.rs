//! Strongly-typed ID types for domain entities.
//!
//! All identifiers are issued by the backend and opaque to the client;
//! the wrappers exist so a tenant ID cannot be passed where a user ID is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate a strongly-typed wrapper around a backend-issued ID.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an ID from the backend-issued string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the ID, returning the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user.
    UserId
);

define_id!(
    /// Unique identifier for a tenant (one managed residential community).
    TenantId
);

define_id!(
    /// Unique identifier for a role within a tenant.
    RoleId
);

define_id!(
    /// Unique identifier for a dwelling unit within a tenant.
    UnitId
);
