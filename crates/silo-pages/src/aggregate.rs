//! Archive usage aggregation.
//!
//! Resolves a user's archive references against the live registry with a
//! concurrent fan-out/fan-in: total latency is bounded by the slowest
//! individual lookup, not the sum.

use futures::future::try_join_all;
use serde::Serialize;
use silo_registry::{ArchiveRegistry, RegistryError};
use silo_store::ArchiveRef;

/// An archive reference merged with live registry facts. Exists only
/// transiently per request; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct UserArchive {
    pub key: String,
    pub name: String,
    /// Manifest title; `None` when the manifest has not synced yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub num_peers: u32,
    pub disk_usage: u64,
}

/// The aggregated result for one user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserArchives {
    /// Surviving archives, in the user's reference order.
    pub archives: Vec<UserArchive>,
    /// Sum of peer counts over the surviving archives. 0 for an empty list.
    pub peer_count: u64,
}

/// Resolve each reference against the registry, concurrently.
///
/// References whose key is not currently registered (evicted, not yet
/// loaded) are dropped from the result — an expected steady-state
/// condition, not an error. Any registry *lookup failure* fails the whole
/// aggregation: callers must not render partial, inconsistent pages.
pub async fn aggregate_user_archives<R>(
    registry: &R,
    refs: &[ArchiveRef],
) -> Result<UserArchives, RegistryError>
where
    R: ArchiveRegistry + ?Sized,
{
    let resolved = try_join_all(refs.iter().map(|r| resolve_ref(registry, r))).await?;

    let archives: Vec<UserArchive> = resolved.into_iter().flatten().collect();
    let peer_count = archives.iter().map(|a| u64::from(a.num_peers)).sum();

    Ok(UserArchives {
        archives,
        peer_count,
    })
}

/// Resolve a single reference. `Ok(None)` when the archive is not
/// registered.
async fn resolve_ref<R>(
    registry: &R,
    archive_ref: &ArchiveRef,
) -> Result<Option<UserArchive>, RegistryError>
where
    R: ArchiveRegistry + ?Sized,
{
    let archive = match registry.archive(&archive_ref.key).await? {
        Some(archive) => archive,
        None => return Ok(None),
    };

    let (manifest, disk_usage) = tokio::try_join!(
        registry.manifest(&archive_ref.key),
        registry.disk_usage(&archive_ref.key),
    )?;

    Ok(Some(UserArchive {
        key: archive_ref.key.clone(),
        name: archive_ref.name.clone(),
        title: manifest.and_then(|m| m.title),
        num_peers: archive.num_peers,
        disk_usage,
    }))
}
