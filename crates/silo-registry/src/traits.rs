//! Archive registry trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RegistryError;
use crate::types::{Archive, Manifest};

/// Read-only view of the live archive registry.
///
/// Implementations must be thread-safe (`Send + Sync`); lookups are issued
/// concurrently during per-request aggregation.
///
/// All methods distinguish "not registered" (`Ok(None)`) from "registry
/// failed to answer" (`Err`). Callers drop unregistered references silently
/// and abort on errors.
#[async_trait]
pub trait ArchiveRegistry: Send + Sync {
    /// Look up a live archive by key.
    async fn archive(&self, key: &str) -> Result<Option<Archive>, RegistryError>;

    /// Fetch the manifest for an archive. `Ok(None)` when the manifest has
    /// not synced yet.
    async fn manifest(&self, key: &str) -> Result<Option<Manifest>, RegistryError>;

    /// Compute the current disk usage of an archive in bytes.
    async fn disk_usage(&self, key: &str) -> Result<u64, RegistryError>;
}

/// Blanket implementation for `Arc<R>` where `R: ArchiveRegistry`.
#[async_trait]
impl<R: ArchiveRegistry + ?Sized> ArchiveRegistry for Arc<R> {
    #[inline]
    async fn archive(&self, key: &str) -> Result<Option<Archive>, RegistryError> {
        (**self).archive(key).await
    }

    #[inline]
    async fn manifest(&self, key: &str) -> Result<Option<Manifest>, RegistryError> {
        (**self).manifest(key).await
    }

    #[inline]
    async fn disk_usage(&self, key: &str) -> Result<u64, RegistryError> {
        (**self).disk_usage(key).await
    }
}
