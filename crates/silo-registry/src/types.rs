//! Registry entity types.

use serde::{Deserialize, Serialize};

/// A live archive tracked by the registry.
///
/// The registry owns this state; everything the page layer sees is a
/// point-in-time snapshot taken during aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Archive {
    pub key: String,
    /// Number of network participants currently replicating this archive.
    pub num_peers: u32,
}

/// Archive metadata resolved from the registry.
///
/// All fields are optional: a freshly created archive may not have synced
/// its manifest yet, which is an expected steady-state condition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Manifest {
    /// Create a manifest with just a title.
    #[inline]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
        }
    }
}
