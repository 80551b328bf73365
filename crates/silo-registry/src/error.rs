//! Registry error types.

/// Registry error.
///
/// An archive missing from the registry is NOT an error — lookups return
/// `Ok(None)` and the caller filters the reference out. Errors mean the
/// registry itself could not answer, and the page render must abort rather
/// than show a partially-resolved listing.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The registry subsystem is unreachable or not yet initialized.
    ///
    /// Produced by networked registry adapters (the replication service
    /// behind a real deployment); the in-memory registry never constructs
    /// this variant. Callers treat it the same as [`Backend`]: abort the
    /// render.
    ///
    /// [`Backend`]: RegistryError::Backend
    #[error("registry unavailable: {0}")]
    Unavailable(String),

    /// Backend error (swarm I/O, disk scan, etc.).
    #[error("backend error: {0}")]
    Backend(String),
}

impl RegistryError {
    /// Create a backend error from any error type.
    #[inline]
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        Self::Backend(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_name_the_failure() {
        let unavailable = RegistryError::Unavailable("swarm not started".into());
        assert_eq!(
            unavailable.to_string(),
            "registry unavailable: swarm not started"
        );

        let backend = RegistryError::backend("disk scan failed");
        assert_eq!(backend.to_string(), "backend error: disk scan failed");
    }
}
