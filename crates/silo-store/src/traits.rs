//! Read-only data-access traits for the backing stores.
//!
//! The page controller consumes these contracts only; persistence and write
//! paths live in the external platform services.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::options::ListOptions;
use crate::records::{ActivityEvent, ArchiveListing, FeaturedArchive, User};

/// User account store.
///
/// Implementations must be thread-safe (`Send + Sync`) as they are called
/// concurrently from independent request tasks.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// List user accounts.
    async fn list(&self, opts: &ListOptions) -> Result<Vec<User>, StoreError>;

    /// Look up a user by username. Returns `None` when no user matches.
    async fn by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
}

/// Platform-wide archive listing store.
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    /// List archives, typically with [`ListOptions::popular`].
    async fn list(&self, opts: &ListOptions) -> Result<Vec<ArchiveListing>, StoreError>;
}

/// Global activity feed store.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// List global activity events, typically with [`ListOptions::latest`].
    async fn list_global_events(&self, opts: &ListOptions)
        -> Result<Vec<ActivityEvent>, StoreError>;
}

/// Editorially curated featured-archive store.
#[async_trait]
pub trait FeaturedStore: Send + Sync {
    /// List all featured archives in curation order.
    async fn list(&self) -> Result<Vec<FeaturedArchive>, StoreError>;
}

#[async_trait]
impl<S: UserStore + ?Sized> UserStore for Arc<S> {
    #[inline]
    async fn list(&self, opts: &ListOptions) -> Result<Vec<User>, StoreError> {
        (**self).list(opts).await
    }

    #[inline]
    async fn by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        (**self).by_username(username).await
    }
}

#[async_trait]
impl<S: ArchiveStore + ?Sized> ArchiveStore for Arc<S> {
    #[inline]
    async fn list(&self, opts: &ListOptions) -> Result<Vec<ArchiveListing>, StoreError> {
        (**self).list(opts).await
    }
}

#[async_trait]
impl<S: ActivityStore + ?Sized> ActivityStore for Arc<S> {
    #[inline]
    async fn list_global_events(
        &self,
        opts: &ListOptions,
    ) -> Result<Vec<ActivityEvent>, StoreError> {
        (**self).list_global_events(opts).await
    }
}

#[async_trait]
impl<S: FeaturedStore + ?Sized> FeaturedStore for Arc<S> {
    #[inline]
    async fn list(&self) -> Result<Vec<FeaturedArchive>, StoreError> {
        (**self).list().await
    }
}
