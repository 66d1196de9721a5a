//! User record and refresh-merge semantics.
//!
//! The record mirrors the backend's current-user resource: identity fields
//! are required, everything else is optional and opaque to the client.
//! `role_name` drives tier resolution; `permissions` is the fallback
//! signal when the role label is absent or unrecognized.

use rukunos_core::{RoleId, TenantId, UnitId, UserId};
use serde::{Deserialize, Serialize};

/// An authenticated user of the platform, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-issued user ID.
    pub id: UserId,
    /// The user's email address.
    pub email: String,
    /// The user's full name.
    pub full_name: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// The tenant (residential community) the user belongs to.
    pub tenant_id: Option<TenantId>,
    /// Display name of the tenant.
    pub tenant_name: Option<String>,
    /// The dwelling unit assigned to the user.
    pub unit_id: Option<UnitId>,
    /// The user's role within the tenant.
    pub role_id: Option<RoleId>,
    /// Role label; matched case-insensitively by the tier resolver.
    pub role_name: Option<String>,
    /// Capability identifiers granted through the role. Order is
    /// irrelevant and duplicates are immaterial.
    pub permissions: Option<Vec<String>>,
    /// Legacy free-form role field, carried for compatibility but never
    /// consulted by the tier resolver.
    pub role: Option<String>,
}

impl User {
    /// Creates a user with only the required identity fields.
    #[must_use]
    pub fn new(
        id: impl Into<UserId>,
        email: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            full_name: full_name.into(),
            phone: None,
            tenant_id: None,
            tenant_name: None,
            unit_id: None,
            role_id: None,
            role_name: None,
            permissions: None,
            role: None,
        }
    }

    /// Sets the contact phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the tenant the user belongs to.
    #[must_use]
    pub fn with_tenant(mut self, id: impl Into<TenantId>, name: impl Into<String>) -> Self {
        self.tenant_id = Some(id.into());
        self.tenant_name = Some(name.into());
        self
    }

    /// Sets the assigned dwelling unit.
    #[must_use]
    pub fn with_unit(mut self, id: impl Into<UnitId>) -> Self {
        self.unit_id = Some(id.into());
        self
    }

    /// Sets the role ID.
    #[must_use]
    pub fn with_role_id(mut self, id: impl Into<RoleId>) -> Self {
        self.role_id = Some(id.into());
        self
    }

    /// Sets the role label.
    #[must_use]
    pub fn with_role_name(mut self, name: impl Into<String>) -> Self {
        self.role_name = Some(name.into());
        self
    }

    /// Sets the capability identifiers.
    #[must_use]
    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = Some(permissions.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the legacy free-form role field.
    #[must_use]
    pub fn with_legacy_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Returns true if the permission set contains `permission`.
    ///
    /// False when no permission set is present; never errors.
    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .as_ref()
            .is_some_and(|perms| perms.iter().any(|p| p == permission))
    }

    /// Merges a freshly fetched record over this stored one.
    ///
    /// Every field of the fetched record wins except `role_name` and
    /// `permissions`: those are retained from the stored record when the
    /// fetched value is absent or empty, so a backend that omits role
    /// metadata on the current-user resource cannot downgrade a session
    /// that already knows it.
    #[must_use]
    pub fn merged_with(self, mut fetched: User) -> User {
        if fetched.role_name.as_deref().is_none_or(str::is_empty) {
            fetched.role_name = self.role_name;
        }
        if fetched.permissions.as_deref().is_none_or(<[String]>::is_empty) {
            fetched.permissions = self.permissions;
        }
        fetched
    }
}
