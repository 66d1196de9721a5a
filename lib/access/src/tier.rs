//! Authorization tier resolution.
//!
//! A user's effective tier is derived on demand from role metadata, with
//! the permission set as a fallback signal when the role label is absent
//! or unrecognized. Precedence is encoded as an explicit ordered rule
//! table evaluated by one loop, so the ordering is data, not an accident
//! of which function calls which.

use crate::user::User;
use std::fmt;

/// The five mutually exclusive authorization tiers, highest precedence
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Tenant administrator.
    Admin,
    /// Treasurer/finance staff.
    Bendahara,
    /// Secretariat/communications staff.
    Sekretariat,
    /// Security staff.
    Security,
    /// Default resident tier; the complement of the other four.
    Resident,
}

impl Tier {
    /// Canonical lower-case role label for this tier.
    ///
    /// These are the labels the resolver matches against, so Security is
    /// "satpam" and Resident is "warga".
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Bendahara => "bendahara",
            Self::Sekretariat => "sekretariat",
            Self::Security => "satpam",
            Self::Resident => "warga",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the precedence table: a tier, its role label, and the
/// capability identifiers that imply it when no label matches anywhere.
struct TierRule {
    tier: Tier,
    label: &'static str,
    fallback: &'static [&'static str],
}

/// Privileged tiers in descending precedence. Resident is the complement
/// and needs no rule.
const TIER_RULES: [TierRule; 4] = [
    TierRule {
        tier: Tier::Admin,
        label: "admin",
        fallback: &["users.manage", "roles.manage", "tenant.settings"],
    },
    TierRule {
        tier: Tier::Bendahara,
        label: "bendahara",
        fallback: &["billing.create", "billing.payment", "billing.update"],
    },
    TierRule {
        tier: Tier::Sekretariat,
        label: "sekretariat",
        fallback: &[
            "communication.announcement.create",
            "communication.announcement.update",
        ],
    },
    TierRule {
        tier: Tier::Security,
        label: "satpam",
        fallback: &["security.visitor.create", "security.alert.respond"],
    },
];

/// The resolved tier of a principal.
///
/// At most one tier is held. A missing user resolves to the empty set:
/// unauthenticated principals hold no tier at all, not even Resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierSet {
    tier: Option<Tier>,
}

impl TierSet {
    /// Resolves the tier for an optional user snapshot.
    ///
    /// The role label is matched first, case-insensitively, against the
    /// whole rule table; a label match anywhere beats every permission
    /// fallback. Only when no label matched does the fallback pass run,
    /// top-down, taking the first rule whose capability set intersects the
    /// user's permissions. A user matching nothing is a Resident.
    #[must_use]
    pub fn resolve(user: Option<&User>) -> Self {
        let Some(user) = user else {
            return Self { tier: None };
        };

        if let Some(role) = user.role_name.as_deref().filter(|r| !r.is_empty()) {
            for rule in &TIER_RULES {
                if role.eq_ignore_ascii_case(rule.label) {
                    return Self {
                        tier: Some(rule.tier),
                    };
                }
            }
        }

        for rule in &TIER_RULES {
            if rule.fallback.iter().any(|p| user.has_permission(p)) {
                return Self {
                    tier: Some(rule.tier),
                };
            }
        }

        Self {
            tier: Some(Tier::Resident),
        }
    }

    /// The resolved tier, or `None` when no user was present.
    #[must_use]
    pub fn tier(&self) -> Option<Tier> {
        self.tier
    }

    /// Returns true if the principal holds the Admin tier.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.tier == Some(Tier::Admin)
    }

    /// Returns true if the principal holds the Bendahara tier.
    #[must_use]
    pub fn is_bendahara(&self) -> bool {
        self.tier == Some(Tier::Bendahara)
    }

    /// Returns true if the principal holds the Sekretariat tier.
    #[must_use]
    pub fn is_sekretariat(&self) -> bool {
        self.tier == Some(Tier::Sekretariat)
    }

    /// Returns true if the principal holds the Security tier.
    #[must_use]
    pub fn is_security(&self) -> bool {
        self.tier == Some(Tier::Security)
    }

    /// Returns true if the principal holds the Resident tier.
    #[must_use]
    pub fn is_resident(&self) -> bool {
        self.tier == Some(Tier::Resident)
    }

    /// Finance is an alias over the Bendahara tier, not a separate tier.
    #[must_use]
    pub fn is_finance(&self) -> bool {
        self.is_bendahara()
    }

    /// Secretariat is an alias over the Sekretariat tier, not a separate
    /// tier.
    #[must_use]
    pub fn is_secretariat(&self) -> bool {
        self.is_sekretariat()
    }
}

/// Effective capability check.
///
/// The Admin tier implies every capability unconditionally; all other
/// tiers defer to the raw permission set. Absent users hold nothing.
#[must_use]
pub fn effective_permission(user: Option<&User>, permission: &str) -> bool {
    if TierSet::resolve(user).is_admin() {
        return true;
    }
    user.is_some_and(|u| u.has_permission(permission))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new("u-1", "ani@example.com", "Ani Wijaya")
    }

    fn exactly_one_tier(set: &TierSet) -> bool {
        [
            set.is_admin(),
            set.is_bendahara(),
            set.is_sekretariat(),
            set.is_security(),
            set.is_resident(),
        ]
        .iter()
        .filter(|held| **held)
        .count()
            == 1
    }

    #[test]
    fn every_user_holds_exactly_one_tier() {
        let samples = [
            user(),
            user().with_role_name("Admin"),
            user().with_role_name("satpam"),
            user().with_role_name("unknown-label"),
            user().with_permissions(["billing.create"]),
            user()
                .with_role_name("satpam")
                .with_permissions(["users.manage"]),
            user().with_permissions(["billing.view", "announcement.view"]),
        ];
        for sample in &samples {
            let set = TierSet::resolve(Some(sample));
            assert!(exactly_one_tier(&set), "violated for {sample:?}");
        }
    }

    #[test]
    fn admin_label_matches_any_casing() {
        for label in ["admin", "Admin", "ADMIN", "aDmIn"] {
            let u = user().with_role_name(label);
            assert!(TierSet::resolve(Some(&u)).is_admin(), "casing {label}");
        }
    }

    #[test]
    fn admin_label_wins_regardless_of_permissions() {
        let u = user()
            .with_role_name("Admin")
            .with_permissions(["billing.create"]);
        let set = TierSet::resolve(Some(&u));
        assert!(set.is_admin());
        assert!(!set.is_bendahara());
    }

    #[test]
    fn billing_permission_falls_back_to_bendahara() {
        let u = user().with_permissions(["billing.create"]);
        let set = TierSet::resolve(Some(&u));
        assert!(set.is_bendahara());
        assert!(!set.is_admin());
        assert!(!set.is_resident());
    }

    #[test]
    fn label_match_beats_higher_tier_fallback() {
        // A satpam with users.manage stays Security: the label claims the
        // tier, the stray admin permission does not.
        let u = user()
            .with_role_name("satpam")
            .with_permissions(["users.manage"]);
        let set = TierSet::resolve(Some(&u));
        assert!(set.is_security());
        assert!(!set.is_admin());
    }

    #[test]
    fn unrecognized_label_falls_back_to_permissions() {
        let u = user()
            .with_role_name("Pengurus")
            .with_permissions(["communication.announcement.create"]);
        assert!(TierSet::resolve(Some(&u)).is_sekretariat());
    }

    #[test]
    fn empty_label_falls_back_to_permissions() {
        let u = user()
            .with_role_name("")
            .with_permissions(["security.alert.respond"]);
        assert!(TierSet::resolve(Some(&u)).is_security());
    }

    #[test]
    fn fallback_respects_precedence_order() {
        let u = user().with_permissions(["security.visitor.create", "billing.payment"]);
        assert!(TierSet::resolve(Some(&u)).is_bendahara());
    }

    #[test]
    fn plain_user_is_resident() {
        let u = user().with_permissions(["billing.view", "announcement.view"]);
        let set = TierSet::resolve(Some(&u));
        assert!(set.is_resident());
    }

    #[test]
    fn legacy_role_field_is_ignored() {
        let u = user().with_legacy_role("admin");
        assert!(TierSet::resolve(Some(&u)).is_resident());
    }

    #[test]
    fn absent_user_holds_no_tier() {
        let set = TierSet::resolve(None);
        assert_eq!(set.tier(), None);
        assert!(!set.is_admin());
        assert!(!set.is_resident());
    }

    #[test]
    fn finance_and_secretariat_are_aliases() {
        let bendahara = user().with_role_name("bendahara");
        let set = TierSet::resolve(Some(&bendahara));
        assert!(set.is_finance());
        assert!(set.is_bendahara());

        let sekretariat = user().with_role_name("Sekretariat");
        let set = TierSet::resolve(Some(&sekretariat));
        assert!(set.is_secretariat());
        assert!(set.is_sekretariat());
    }

    #[test]
    fn admin_implies_every_capability() {
        let u = user().with_role_name("admin");
        assert!(effective_permission(Some(&u), "billing.create"));
        assert!(effective_permission(Some(&u), "anything.at.all"));
    }

    #[test]
    fn non_admin_defers_to_raw_permissions() {
        let u = user()
            .with_role_name("bendahara")
            .with_permissions(["billing.create"]);
        assert!(effective_permission(Some(&u), "billing.create"));
        assert!(!effective_permission(Some(&u), "users.manage"));
    }

    #[test]
    fn absent_user_has_no_capabilities() {
        assert!(!effective_permission(None, "billing.view"));
    }

    #[test]
    fn tier_labels() {
        assert_eq!(Tier::Admin.label(), "admin");
        assert_eq!(Tier::Security.label(), "satpam");
        assert_eq!(Tier::Resident.label(), "warga");
        assert_eq!(Tier::Bendahara.to_string(), "bendahara");
    }
}
