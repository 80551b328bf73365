//! In-memory store implementations.
//!
//! Suitable for tests, demos, and small self-hosted deployments. For real
//! deployments, implement the store traits against the platform database.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::options::{ListOptions, SortOrder};
use crate::records::{ActivityEvent, ArchiveListing, FeaturedArchive, User};
use crate::traits::{ActivityStore, ArchiveStore, FeaturedStore, UserStore};

/// Apply cursor, ordering, and limit to records already in key order.
fn apply_paging<T, K>(mut records: Vec<T>, opts: &ListOptions, key: K) -> Vec<T>
where
    K: Fn(&T) -> &str,
{
    if let Some(ref lt) = opts.lt {
        records.retain(|r| key(r) < lt.as_str());
    }
    if opts.reverse {
        records.reverse();
    }
    if let Some(limit) = opts.limit {
        records.truncate(limit);
    }
    records
}

/// In-memory user store.
#[derive(Debug, Clone, Default)]
pub struct MemoryUsers {
    users: Vec<User>,
}

impl MemoryUsers {
    /// Create from a list of users. Records are kept in id order.
    pub fn from_users<I: IntoIterator<Item = User>>(users: I) -> Self {
        let mut users: Vec<User> = users.into_iter().collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        Self { users }
    }

    /// Number of stored users.
    #[inline]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if the store is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUsers {
    async fn list(&self, opts: &ListOptions) -> Result<Vec<User>, StoreError> {
        Ok(apply_paging(self.users.clone(), opts, |u| u.id.as_str()))
    }

    async fn by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }
}

/// In-memory archive listing store.
#[derive(Debug, Clone, Default)]
pub struct MemoryArchives {
    archives: Vec<ArchiveListing>,
}

impl MemoryArchives {
    /// Create from a list of archive listings. Records are kept in key order.
    pub fn from_listings<I: IntoIterator<Item = ArchiveListing>>(listings: I) -> Self {
        let mut archives: Vec<ArchiveListing> = listings.into_iter().collect();
        archives.sort_by(|a, b| a.key.cmp(&b.key));
        Self { archives }
    }
}

#[async_trait]
impl ArchiveStore for MemoryArchives {
    async fn list(&self, opts: &ListOptions) -> Result<Vec<ArchiveListing>, StoreError> {
        let mut archives = self.archives.clone();
        if opts.sort == SortOrder::Popular {
            archives.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        }
        Ok(apply_paging(archives, opts, |a| a.key.as_str()))
    }
}

/// In-memory activity feed store.
#[derive(Debug, Clone, Default)]
pub struct MemoryActivity {
    events: Vec<ActivityEvent>,
}

impl MemoryActivity {
    /// Create from a list of events. Records are kept in key order.
    pub fn from_events<I: IntoIterator<Item = ActivityEvent>>(events: I) -> Self {
        let mut events: Vec<ActivityEvent> = events.into_iter().collect();
        events.sort_by(|a, b| a.key.cmp(&b.key));
        Self { events }
    }
}

#[async_trait]
impl ActivityStore for MemoryActivity {
    async fn list_global_events(
        &self,
        opts: &ListOptions,
    ) -> Result<Vec<ActivityEvent>, StoreError> {
        Ok(apply_paging(self.events.clone(), opts, |e| e.key.as_str()))
    }
}

/// In-memory featured-archive store.
#[derive(Debug, Clone, Default)]
pub struct MemoryFeatured {
    featured: Vec<FeaturedArchive>,
}

impl MemoryFeatured {
    /// Create from a list of featured archives, preserving curation order.
    pub fn from_archives<I: IntoIterator<Item = FeaturedArchive>>(archives: I) -> Self {
        Self {
            featured: archives.into_iter().collect(),
        }
    }
}

#[async_trait]
impl FeaturedStore for MemoryFeatured {
    async fn list(&self) -> Result<Vec<FeaturedArchive>, StoreError> {
        Ok(self.featured.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(n: u32) -> ActivityEvent {
        ActivityEvent {
            key: format!("evt-{:03}", n),
            ts: 1000 + u64::from(n),
            username: "alice".into(),
            action: "publish".into(),
            target: None,
        }
    }

    fn listing(key: &str, popularity: u64) -> ArchiveListing {
        ArchiveListing {
            key: key.into(),
            name: key.into(),
            owner: "alice".into(),
            popularity,
        }
    }

    #[tokio::test]
    async fn activity_latest_page() {
        let store = MemoryActivity::from_events((1..=10).map(event));
        let events = store
            .list_global_events(&ListOptions::latest(3, None))
            .await
            .unwrap();
        let keys: Vec<_> = events.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["evt-010", "evt-009", "evt-008"]);
    }

    #[tokio::test]
    async fn activity_cursor_is_exclusive() {
        let store = MemoryActivity::from_events((1..=10).map(event));
        let events = store
            .list_global_events(&ListOptions::latest(3, Some("evt-008".into())))
            .await
            .unwrap();
        let keys: Vec<_> = events.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["evt-007", "evt-006", "evt-005"]);
    }

    #[tokio::test]
    async fn archives_sorted_by_popularity() {
        let store = MemoryArchives::from_listings([
            listing("a", 5),
            listing("b", 50),
            listing("c", 10),
        ]);
        let listings = store.list(&ListOptions::popular(2)).await.unwrap();
        let keys: Vec<_> = listings.iter().map(|l| l.key.as_str()).collect();
        assert_eq!(keys, ["b", "c"]);
    }

    #[tokio::test]
    async fn users_lookup_by_username() {
        let alice = User {
            id: "u1".into(),
            username: "alice".into(),
            email: "alice@example.com".into(),
            disk_usage: 0,
            plan: Default::default(),
            disk_quota_override: None,
            scopes: vec![],
            archives: vec![],
        };
        let store = MemoryUsers::from_users([alice]);
        assert!(store.by_username("alice").await.unwrap().is_some());
        assert!(store.by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn featured_preserves_curation_order() {
        let store = MemoryFeatured::from_archives([
            FeaturedArchive {
                key: "z".into(),
                name: "z".into(),
                owner: "a".into(),
                description: None,
            },
            FeaturedArchive {
                key: "a".into(),
                name: "a".into(),
                owner: "b".into(),
                description: None,
            },
        ]);
        let featured = store.list().await.unwrap();
        assert_eq!(featured[0].key, "z");
        assert_eq!(featured[1].key, "a");
    }
}
