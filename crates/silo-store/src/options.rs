//! Listing options for store queries.
//!
//! An explicit structure enumerating the recognized options. Unknown options
//! are unrepresentable, unlike the free-form option bags some stores accept.

use serde::{Deserialize, Serialize};

/// Sort order for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Insertion/creation order (the store's natural key order).
    #[default]
    Created,
    /// Descending popularity.
    Popular,
}

/// Options accepted by store `list` operations.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub sort: SortOrder,
    /// Maximum number of records to return. `None` = no limit.
    pub limit: Option<usize>,
    /// Exclusive upper-bound cursor: only records with key < `lt` are
    /// returned. Applied in key order, before `reverse`.
    pub lt: Option<String>,
    /// Return records in reverse order.
    pub reverse: bool,
}

impl ListOptions {
    /// Options for a popularity-sorted listing with a limit.
    #[inline]
    pub fn popular(limit: usize) -> Self {
        Self {
            sort: SortOrder::Popular,
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Options for a newest-first page of at most `limit` records, starting
    /// strictly before the `lt` cursor when given.
    #[inline]
    pub fn latest(limit: usize, lt: Option<String>) -> Self {
        Self {
            sort: SortOrder::Created,
            limit: Some(limit),
            lt,
            reverse: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = ListOptions::default();
        assert_eq!(opts.sort, SortOrder::Created);
        assert!(opts.limit.is_none());
        assert!(opts.lt.is_none());
        assert!(!opts.reverse);
    }

    #[test]
    fn popular_ctor() {
        let opts = ListOptions::popular(25);
        assert_eq!(opts.sort, SortOrder::Popular);
        assert_eq!(opts.limit, Some(25));
    }

    #[test]
    fn latest_ctor() {
        let opts = ListOptions::latest(25, Some("evt-100".into()));
        assert!(opts.reverse);
        assert_eq!(opts.lt.as_deref(), Some("evt-100"));
    }
}
