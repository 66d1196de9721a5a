//! Persisted session state for the authenticated principal.
//!
//! A session holds exactly one bearer token and at most one user record,
//! both kept through the persistence collaborator under fixed keys. The
//! token is the sole authentication signal: a stored user without a token
//! reads as unauthenticated. All operations are synchronous `&mut self`
//! mutations; the session is created at application bootstrap and passed
//! to whoever needs it rather than living in a global.

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::persist::PersistenceBackend;
use crate::router::Router;
use crate::user::User;
use tracing::{debug, warn};

/// Persistence key for the bearer token.
const TOKEN_KEY: &str = "token";
/// Persistence key for the serialized user record.
const USER_KEY: &str = "user";

/// Durable holder of the bearer token and the user record.
pub struct SessionStore {
    backend: Box<dyn PersistenceBackend>,
    config: SessionConfig,
}

impl SessionStore {
    /// Creates a store over the given persistence backend.
    #[must_use]
    pub fn new(backend: Box<dyn PersistenceBackend>, config: SessionConfig) -> Self {
        Self { backend, config }
    }

    /// Stores a fresh bearer token, resetting its TTL.
    ///
    /// An empty token is rejected without touching the stored one; the
    /// rejection is logged and returned, never escalated.
    pub fn set_token(&mut self, token: &str) -> Result<(), SessionError> {
        if token.is_empty() {
            warn!("rejected attempt to store an empty bearer token");
            return Err(SessionError::InvalidTokenWrite);
        }
        self.backend
            .write(TOKEN_KEY, token, &self.config.write_options());
        debug!(length = token.len(), "bearer token stored");
        Ok(())
    }

    /// Unconditionally replaces the stored user record, resetting its TTL.
    ///
    /// Field contents are not validated; the backend is the authority on
    /// what a user record holds.
    pub fn set_user(&mut self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self
                .backend
                .write(USER_KEY, &json, &self.config.write_options()),
            Err(err) => warn!(%err, "failed to serialize user record; previous record kept"),
        }
    }

    /// Returns the current bearer token, if a non-empty one is stored.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.backend.read(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Returns the current user record, if one is stored and readable.
    ///
    /// A corrupt persisted record reads as absent.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        let raw = self.backend.read(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!(%err, "stored user record is corrupt; treating as absent");
                None
            }
        }
    }

    /// True iff a non-empty bearer token is present.
    ///
    /// A stored user without a token does not count.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Raw membership test against the stored user's permission set.
    ///
    /// False when no user or no permission set is present; never errors.
    /// Tier-aware checks (where Admin implies everything) live in
    /// [`crate::tier::effective_permission`].
    #[must_use]
    pub fn has_capability(&self, permission: &str) -> bool {
        self.user().is_some_and(|user| user.has_permission(permission))
    }

    /// Clears both token and user in one step.
    ///
    /// Pure state mutation: navigation is the caller's concern. See
    /// [`logout`](Self::logout) for the composed operation.
    pub fn clear(&mut self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }

    /// Ends the session: clears state, then instructs the router to return
    /// to the login entry point.
    ///
    /// The redirect is fire-and-forget and idempotent at the router
    /// boundary.
    pub fn logout(&mut self, router: &dyn Router, login_path: &str) {
        self.clear();
        router.navigate(login_path);
    }
}
