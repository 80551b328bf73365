//! Shared server state.

use std::sync::Arc;

use silo_config::Config;
use silo_pages::Pages;
use silo_registry::{ArchiveRegistry, MemoryRegistry};
use silo_store::{
    ActivityStore, ArchiveStore, FeaturedStore, MemoryActivity, MemoryArchives, MemoryFeatured,
    MemoryUsers, UserStore,
};

use crate::sessions::SessionStore;

/// Shared state for all request handlers. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pages: Pages,
    pub users: Arc<dyn UserStore>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Build state from explicit collaborators.
    pub fn new(
        config: Arc<Config>,
        users: Arc<dyn UserStore>,
        archives: Arc<dyn ArchiveStore>,
        activity: Arc<dyn ActivityStore>,
        featured: Arc<dyn FeaturedStore>,
        registry: Arc<dyn ArchiveRegistry>,
        sessions: Arc<SessionStore>,
    ) -> Self {
        let pages = Pages::new(
            config.clone(),
            users.clone(),
            archives,
            activity,
            featured,
            registry,
        );
        Self {
            config,
            pages,
            users,
            sessions,
        }
    }

    /// State backed entirely by empty in-memory stores, for demos and the
    /// default binary. Real deployments wire their own store adapters.
    pub fn in_memory(config: Config) -> Self {
        Self::new(
            Arc::new(config),
            Arc::new(MemoryUsers::default()),
            Arc::new(MemoryArchives::default()),
            Arc::new(MemoryActivity::default()),
            Arc::new(MemoryFeatured::default()),
            Arc::new(MemoryRegistry::new()),
            Arc::new(SessionStore::default()),
        )
    }
}
