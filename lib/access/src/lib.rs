//! Client-side session state and authorization for RukunOS.
//!
//! This crate provides:
//! - Session storage (`SessionStore`) over a pluggable persistence backend
//! - Tier resolution (`Tier`, `TierSet`) with explicit precedence rules
//! - Current-user refresh (`SessionRefresher`) with fail-soft merging
//! - Navigation gating (`NavigationGate`)
//!
//! # Authorization Model
//!
//! Every UI decision point asks two questions: is this principal
//! authenticated, and which capability tier does it belong to? The first
//! is answered by the presence of a bearer token in the session store; the
//! second is derived on demand from the stored user's role label, falling
//! back to its permission set, under the precedence Admin > Bendahara >
//! Sekretariat > Security > Resident.
//!
//! # Example
//!
//! ```
//! use rukunos_access::{MemoryBackend, SessionConfig, SessionStore, TierSet, User};
//!
//! let mut store = SessionStore::new(Box::new(MemoryBackend::new()), SessionConfig::default());
//! store.set_token("opaque-bearer").expect("token is non-empty");
//!
//! let user = User::new("u-1", "ani@example.com", "Ani Wijaya").with_role_name("Bendahara");
//! store.set_user(&user);
//!
//! assert!(store.is_authenticated());
//! let tiers = TierSet::resolve(store.user().as_ref());
//! assert!(tiers.is_bendahara());
//! assert!(tiers.is_finance());
//! ```

pub mod config;
pub mod error;
pub mod gate;
pub mod notify;
pub mod persist;
pub mod refresh;
pub mod router;
pub mod session;
pub mod tier;
pub mod transport;
pub mod user;

// Re-export main types at crate root
pub use config::{ClientConfig, GateConfig, SessionConfig};
pub use error::{RefreshError, SessionError};
pub use gate::{Decision, NavigationGate};
pub use notify::{NoopNotifier, NoteKind, Notifier};
pub use persist::{MemoryBackend, PersistenceBackend, SameSite, WriteOptions};
pub use refresh::{RefreshOutcome, SessionRefresher};
pub use router::{NoopRouter, Router};
pub use session::SessionStore;
pub use tier::{Tier, TierSet, effective_permission};
pub use transport::{ApiError, ME_PATH, Method, Transport};
pub use user::User;
