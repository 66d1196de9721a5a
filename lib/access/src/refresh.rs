//! Current-user refresh orchestration.
//!
//! The refresher fetches the backend's current-user resource and merges it
//! into the session store under the precedence rules of
//! [`User::merged_with`]. Failure handling is deliberately fail-soft: a
//! refresh that goes wrong leaves the session in its last-known-good state
//! rather than evicting an otherwise-valid session over a transient
//! network problem.

use crate::error::RefreshError;
use crate::notify::{NoopNotifier, NoteKind, Notifier};
use crate::session::SessionStore;
use crate::transport::{ME_PATH, Method, Transport};
use crate::user::User;
use rootcause::prelude::Report;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of a refresh attempt that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No token was present; nothing was fetched and the session is
    /// untouched.
    NoToken,
    /// The merged user record now stored in the session.
    Refreshed(User),
}

/// Orchestrates fetching the current-user resource and merging it into
/// the session store.
#[derive(Clone)]
pub struct SessionRefresher {
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
}

impl SessionRefresher {
    /// Creates a refresher over the given transport. Failures are not
    /// forwarded anywhere until a notifier is attached.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            notifier: Arc::new(NoopNotifier),
        }
    }

    /// Attaches the notification collaborator that failure reports are
    /// forwarded to.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Fetches the current-user resource and merges it into `store`.
    ///
    /// Without a stored token this is a no-op returning
    /// [`RefreshOutcome::NoToken`]; the session is not cleared. On any
    /// failure the session is likewise left untouched and the error is
    /// surfaced to the caller and the notifier only — a failed refresh is
    /// never proof that the session is invalid, and callers may retry at
    /// will.
    ///
    /// Overlapping calls race: each one merges when its response arrives,
    /// so the last completion wins. The store itself is only mutated after
    /// the response has been awaited.
    ///
    /// # Errors
    ///
    /// Returns [`RefreshError`] for transport failures, non-success
    /// responses, and undecodable payloads.
    pub async fn refresh_current_user(
        &self,
        store: &mut SessionStore,
    ) -> Result<RefreshOutcome, Report<RefreshError>> {
        let Some(token) = store.token() else {
            warn!("current-user refresh requested without a stored token");
            return Ok(RefreshOutcome::NoToken);
        };

        let payload = match self
            .transport
            .request(Method::Get, ME_PATH, Some(&token), None)
            .await
        {
            Ok(payload) => payload,
            Err(err) => {
                let err = RefreshError::from(err);
                warn!(%err, "current-user refresh failed; session state kept");
                self.notifier.notify(NoteKind::Error, &err.to_string());
                return Err(err.into());
            }
        };

        let fetched: User = match serde_json::from_value(payload) {
            Ok(user) => user,
            Err(err) => {
                let err = RefreshError::Payload {
                    message: err.to_string(),
                };
                warn!(%err, "current-user refresh failed; session state kept");
                self.notifier.notify(NoteKind::Error, &err.to_string());
                return Err(err.into());
            }
        };

        let merged = match store.user() {
            Some(stored) => stored.merged_with(fetched),
            None => fetched,
        };
        store.set_user(&merged);
        debug!(user = %merged.id, "current-user record refreshed");

        Ok(RefreshOutcome::Refreshed(merged))
    }
}
