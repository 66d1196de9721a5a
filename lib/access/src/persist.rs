//! Persistence collaborator for session state.
//!
//! Session state survives process restarts through a key-scoped store with
//! cookie-like semantics: each key carries a time-to-live fixed at write
//! time, a same-site policy, and a secure flag. Reads never extend the
//! TTL; only a fresh write resets the expiry clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Same-site policy applied to persisted session keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    /// Sent only in first-party contexts.
    Strict,
    /// Sent on top-level navigations as well.
    Lax,
    /// Sent in all contexts (requires the secure flag).
    None,
}

/// Attributes applied when writing a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Time-to-live from this write. Reads never extend it.
    pub ttl: Duration,
    /// Same-site policy for the key.
    pub same_site: SameSite,
    /// Transmit only when the active origin is HTTPS.
    pub secure: bool,
}

/// Trait for the durable key-scoped store backing a session.
///
/// The session uses exactly two keys, `token` and `user`. Implementations
/// enforce per-key expiry: a read after the TTL has elapsed returns
/// nothing.
pub trait PersistenceBackend: Send + Sync {
    /// Returns the live value for `key`, if present and unexpired.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, resetting its TTL.
    fn write(&mut self, key: &str, value: &str, options: &WriteOptions);

    /// Removes `key` if present.
    fn remove(&mut self, key: &str);
}

/// In-memory backend with cookie-like expiry.
///
/// Used in tests and by embedders that have no durable storage to offer.
/// Expired entries are shadowed on read rather than eagerly evicted.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, Entry>,
}

#[derive(Debug)]
struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries
            .get(key)
            .filter(|entry| entry.expires_at > Utc::now())
            .map(|entry| entry.value.clone())
    }

    fn write(&mut self, key: &str, value: &str, options: &WriteOptions) {
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Utc::now() + options.ttl,
            },
        );
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(ttl: Duration) -> WriteOptions {
        WriteOptions {
            ttl,
            same_site: SameSite::Lax,
            secure: false,
        }
    }

    #[test]
    fn roundtrip() {
        let mut backend = MemoryBackend::new();
        backend.write("token", "abc", &options(Duration::days(3)));
        assert_eq!(backend.read("token").as_deref(), Some("abc"));
    }

    #[test]
    fn missing_key_reads_none() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read("token"), None);
    }

    #[test]
    fn expired_key_reads_none() {
        let mut backend = MemoryBackend::new();
        backend.write("token", "abc", &options(Duration::seconds(-1)));
        assert_eq!(backend.read("token"), None);
    }

    #[test]
    fn overwrite_resets_expiry() {
        let mut backend = MemoryBackend::new();
        backend.write("token", "old", &options(Duration::seconds(-1)));
        backend.write("token", "new", &options(Duration::days(3)));
        assert_eq!(backend.read("token").as_deref(), Some("new"));
    }

    #[test]
    fn remove_drops_key() {
        let mut backend = MemoryBackend::new();
        backend.write("user", "{}", &options(Duration::days(3)));
        backend.remove("user");
        assert_eq!(backend.read("user"), None);
    }
}
