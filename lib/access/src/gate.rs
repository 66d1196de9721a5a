//! Navigation gating.
//!
//! Maps a requested path and the current authentication state to an
//! allow-or-redirect decision. The gate is stateless: every navigation
//! attempt is evaluated afresh against the live session snapshot, and no
//! decision is ever cached.

use crate::config::GateConfig;

/// Decision returned by the navigation gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The navigation may proceed.
    Allow,
    /// The navigation must be redirected to the contained path.
    Redirect(String),
}

/// Pure decision function over (requested path, authentication state).
///
/// Unauthenticated principals are confined to the public entry points;
/// authenticated ones are bounced from login/register to the dashboard.
/// Emitting the redirect is the caller's job, through the router
/// collaborator, which treats repeated redirects to the same target as
/// no-ops.
#[derive(Debug, Clone, Default)]
pub struct NavigationGate {
    config: GateConfig,
}

impl NavigationGate {
    /// Creates a gate over the given entry-point configuration.
    #[must_use]
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Decides whether navigation to `path` may proceed.
    #[must_use]
    pub fn decide(&self, path: &str, authenticated: bool) -> Decision {
        if !authenticated && !self.is_public(path) {
            return Decision::Redirect(self.config.login_path.clone());
        }
        if authenticated && (path == self.config.login_path || path == self.config.register_path) {
            return Decision::Redirect(self.config.dashboard_path.clone());
        }
        Decision::Allow
    }

    fn is_public(&self, path: &str) -> bool {
        path == self.config.login_path
            || path == self.config.register_path
            || path == self.config.landing_path
    }
}
