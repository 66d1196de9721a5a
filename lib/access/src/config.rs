//! Centralized client configuration.
//!
//! Strongly-typed configuration loaded via the `config` crate from
//! environment variables. Every field has a default, so an embedder with
//! no environment at all still gets a working configuration.

use crate::persist::{SameSite, WriteOptions};
use chrono::Duration;
use serde::Deserialize;

/// Top-level client configuration.
#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend API, consumed by the transport collaborator.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Session persistence configuration.
    #[serde(default)]
    pub session: SessionConfig,

    /// Navigation gate configuration.
    #[serde(default)]
    pub gate: GateConfig,
}

/// Session persistence configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Days a persisted session key lives from its last write.
    /// Reads and refreshes do not extend it.
    #[serde(default = "default_ttl_days")]
    pub ttl_days: i64,

    /// Same-site policy for persisted keys.
    #[serde(default = "default_same_site")]
    pub same_site: SameSite,

    /// Whether persisted keys are marked secure (HTTPS-only transmission).
    /// Defaults to true for production safety; set to false for local HTTP
    /// development.
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,
}

/// Navigation gate configuration: the designated entry points.
#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    /// Login entry point; also the redirect target for unauthenticated
    /// navigation to protected paths.
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Registration entry point.
    #[serde(default = "default_register_path")]
    pub register_path: String,

    /// Public landing page.
    #[serde(default = "default_landing_path")]
    pub landing_path: String,

    /// Redirect target for authenticated navigation to login/register.
    #[serde(default = "default_dashboard_path")]
    pub dashboard_path: String,
}

fn default_api_base() -> String {
    "http://localhost:8080".to_string()
}

fn default_ttl_days() -> i64 {
    3
}

fn default_same_site() -> SameSite {
    SameSite::Lax
}

fn default_secure_cookies() -> bool {
    true
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_register_path() -> String {
    "/register".to_string()
}

fn default_landing_path() -> String {
    "/".to_string()
}

fn default_dashboard_path() -> String {
    "/dashboard".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_days: default_ttl_days(),
            same_site: default_same_site(),
            secure_cookies: default_secure_cookies(),
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            register_path: default_register_path(),
            landing_path: default_landing_path(),
            dashboard_path: default_dashboard_path(),
        }
    }
}

impl SessionConfig {
    /// Returns the write attributes for persisted session keys.
    #[must_use]
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            ttl: Duration::days(self.ttl_days),
            same_site: self.same_site,
            secure: self.secure_cookies,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a supplied value cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_config_has_correct_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.ttl_days, 3);
        assert_eq!(config.same_site, SameSite::Lax);
        assert!(config.secure_cookies);
    }

    #[test]
    fn gate_config_has_correct_defaults() {
        let config = GateConfig::default();
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.register_path, "/register");
        assert_eq!(config.landing_path, "/");
        assert_eq!(config.dashboard_path, "/dashboard");
    }

    #[test]
    fn write_options_reflect_ttl() {
        let config = SessionConfig::default();
        assert_eq!(config.write_options().ttl, Duration::days(3));
    }
}
