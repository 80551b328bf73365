//! Page error types.

use silo_registry::RegistryError;
use silo_store::StoreError;

/// Page-level error.
///
/// Redirects are NOT errors — see [`PageOutcome`](crate::PageOutcome).
/// Store and registry failures abort the whole render: a page is either
/// fully resolved or not rendered at all.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The request is structurally disallowed for the current session or
    /// lifecycle state. Surfaced as HTTP 403, never retried.
    #[error("forbidden")]
    Forbidden,

    #[error("store: {0}")]
    Store(#[from] StoreError),

    #[error("registry: {0}")]
    Registry(#[from] RegistryError),
}

impl PageError {
    /// Whether this error maps to an HTTP client error rather than a
    /// server fault.
    #[inline]
    pub fn is_forbidden(&self) -> bool {
        matches!(self, PageError::Forbidden)
    }
}
