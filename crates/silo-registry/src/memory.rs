//! In-memory archive registry.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::RegistryError;
use crate::traits::ArchiveRegistry;
use crate::types::{Archive, Manifest};

#[derive(Debug, Clone)]
struct Entry {
    archive: Archive,
    manifest: Option<Manifest>,
    disk_usage: u64,
    /// Artificial per-lookup delay, for latency tests.
    delay: Option<Duration>,
    /// When set, every lookup for this key fails.
    fail: bool,
}

/// In-memory archive registry for tests, demos, and small deployments.
///
/// Entries can carry an artificial lookup delay or a forced failure, which
/// lets tests exercise the aggregation latency bound and the
/// abort-on-lookup-error policy without a real swarm behind them.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    entries: HashMap<String, Entry>,
}

impl MemoryRegistry {
    /// Create an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an archive with its manifest and disk usage.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        num_peers: u32,
        manifest: Option<Manifest>,
        disk_usage: u64,
    ) {
        let key = key.into();
        self.entries.insert(
            key.clone(),
            Entry {
                archive: Archive { key, num_peers },
                manifest,
                disk_usage,
                delay: None,
                fail: false,
            },
        );
    }

    /// Add an artificial delay to every lookup for `key`.
    pub fn set_delay(&mut self, key: &str, delay: Duration) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.delay = Some(delay);
        }
    }

    /// Make every lookup for `key` fail with a backend error.
    pub fn set_failing(&mut self, key: &str) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.fail = true;
        }
    }

    /// Number of registered archives.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no archives are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    async fn entry(&self, key: &str) -> Result<Option<&Entry>, RegistryError> {
        let entry = match self.entries.get(key) {
            Some(entry) => entry,
            None => return Ok(None),
        };
        if let Some(delay) = entry.delay {
            tokio::time::sleep(delay).await;
        }
        if entry.fail {
            return Err(RegistryError::backend(format!("injected failure for {key}")));
        }
        Ok(Some(entry))
    }
}

#[async_trait]
impl ArchiveRegistry for MemoryRegistry {
    async fn archive(&self, key: &str) -> Result<Option<Archive>, RegistryError> {
        Ok(self.entry(key).await?.map(|e| e.archive.clone()))
    }

    async fn manifest(&self, key: &str) -> Result<Option<Manifest>, RegistryError> {
        Ok(self.entry(key).await?.and_then(|e| e.manifest.clone()))
    }

    async fn disk_usage(&self, key: &str) -> Result<u64, RegistryError> {
        // An unregistered archive occupies no managed disk.
        Ok(self.entry(key).await?.map(|e| e.disk_usage).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_roundtrip() {
        let mut registry = MemoryRegistry::new();
        registry.insert("abc", 3, Some(Manifest::titled("My Site")), 4096);

        let archive = registry.archive("abc").await.unwrap().unwrap();
        assert_eq!(archive.num_peers, 3);

        let manifest = registry.manifest("abc").await.unwrap().unwrap();
        assert_eq!(manifest.title.as_deref(), Some("My Site"));

        assert_eq!(registry.disk_usage("abc").await.unwrap(), 4096);
    }

    #[tokio::test]
    async fn missing_key_is_none_not_error() {
        let registry = MemoryRegistry::new();
        assert!(registry.archive("nope").await.unwrap().is_none());
        assert!(registry.manifest("nope").await.unwrap().is_none());
        assert_eq!(registry.disk_usage("nope").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn absent_manifest_is_none() {
        let mut registry = MemoryRegistry::new();
        registry.insert("fresh", 0, None, 0);
        assert!(registry.archive("fresh").await.unwrap().is_some());
        assert!(registry.manifest("fresh").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn injected_failure_is_error() {
        let mut registry = MemoryRegistry::new();
        registry.insert("bad", 1, None, 0);
        registry.set_failing("bad");
        assert!(registry.archive("bad").await.is_err());
    }
}
