//! Store error types.

/// Store error.
///
/// A missing record is NOT an error — lookups return `Ok(None)`. Errors
/// indicate the backing store itself failed (connection, corruption, etc.)
/// and abort whatever page aggregation is in progress.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backend error (database, network, etc.).
    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create a backend error from any error type.
    #[inline]
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        Self::Backend(err.to_string())
    }
}
