//! Domain records shared across stores.

use serde::{Deserialize, Serialize};

/// Capability tag granting access to the platform-wide archive listings.
pub const SCOPE_ADMIN_ARCHIVES: &str = "admin:dats";

/// Subscription plan tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Basic,
    Pro,
}

/// A registered user account.
///
/// `disk_usage` is updated by background usage jobs outside this codebase;
/// here it is read-only input to the quota figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Current disk usage in bytes.
    #[serde(default)]
    pub disk_usage: u64,
    #[serde(default)]
    pub plan: Plan,
    /// Per-user quota override in bytes. Takes precedence over the plan
    /// quota when set.
    #[serde(default)]
    pub disk_quota_override: Option<u64>,
    /// Capability tags, e.g. [`SCOPE_ADMIN_ARCHIVES`].
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Ordered list of owned archive references.
    #[serde(default)]
    pub archives: Vec<ArchiveRef>,
}

impl User {
    /// Check whether the user carries a capability tag.
    #[inline]
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }

    /// Whether the user is on the paid plan.
    #[inline]
    pub fn is_pro(&self) -> bool {
        self.plan == Plan::Pro
    }
}

/// A per-user reference to an archive.
///
/// Holds the key plus a cached display name. Cached fields are derived and
/// never authoritative; live state is resolved against the archive registry
/// at aggregation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveRef {
    pub key: String,
    pub name: String,
}

/// A platform-wide archive listing entry (for the popular listing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveListing {
    pub key: String,
    pub name: String,
    pub owner: String,
    /// Popularity score used by `SortOrder::Popular`.
    #[serde(default)]
    pub popularity: u64,
}

/// A global activity feed event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// Monotonic event key (also the pagination cursor).
    pub key: String,
    /// Unix timestamp of the event.
    pub ts: u64,
    pub username: String,
    pub action: String,
    /// Archive key the event refers to, when applicable.
    #[serde(default)]
    pub target: Option<String>,
}

/// An editorially featured archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedArchive {
    pub key: String,
    pub name: String,
    pub owner: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".into(),
            username: "alice".into(),
            email: "alice@example.com".into(),
            disk_usage: 0,
            plan: Plan::Basic,
            disk_quota_override: None,
            scopes: vec![SCOPE_ADMIN_ARCHIVES.into()],
            archives: vec![],
        }
    }

    #[test]
    fn scope_check() {
        let u = user();
        assert!(u.has_scope(SCOPE_ADMIN_ARCHIVES));
        assert!(!u.has_scope("admin:users"));
    }

    #[test]
    fn plan_check() {
        let mut u = user();
        assert!(!u.is_pro());
        u.plan = Plan::Pro;
        assert!(u.is_pro());
    }

    #[test]
    fn user_deserialize_defaults() {
        let json = r#"{"id": "u2", "username": "bob", "email": "bob@example.com"}"#;
        let u: User = serde_json::from_str(json).unwrap();
        assert_eq!(u.disk_usage, 0);
        assert_eq!(u.plan, Plan::Basic);
        assert!(u.disk_quota_override.is_none());
        assert!(u.scopes.is_empty());
        assert!(u.archives.is_empty());
    }
}
