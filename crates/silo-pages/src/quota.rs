//! Disk quota figures.
//!
//! Pure derivations from configured limits and current usage; no I/O.

use serde::Serialize;
use silo_config::Config;
use silo_store::User;

const MIB: u64 = 1 << 20;

/// A user's disk quota snapshot: the configured limit and current usage.
///
/// Anonymous visitors have no quota at all — callers hold
/// `Option<DiskQuota>` and render absence, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiskQuota {
    /// Configured limit in bytes (0 = unlimited).
    pub quota_bytes: u64,
    /// Current usage in bytes.
    pub used_bytes: u64,
}

impl DiskQuota {
    /// Percentage of quota used, truncated (not rounded) to an integer in
    /// `[0, 100]`. An unlimited quota reports 0.
    pub fn usage_pct(&self) -> u8 {
        if self.quota_bytes == 0 {
            return 0;
        }
        // u128 to avoid overflow on large byte counts.
        let pct = (u128::from(self.used_bytes) * 100) / u128::from(self.quota_bytes);
        pct.min(100) as u8
    }

    /// Quota limit in whole MiB, truncated.
    #[inline]
    pub fn quota_mib(&self) -> u64 {
        self.quota_bytes / MIB
    }

    /// Current usage in whole MiB, truncated.
    #[inline]
    pub fn used_mib(&self) -> u64 {
        self.used_bytes / MIB
    }
}

/// Configured disk quota for a user, in bytes.
#[inline]
pub fn user_disk_quota(config: &Config, user: &User) -> u64 {
    config
        .quota
        .disk_quota(user.is_pro(), user.disk_quota_override)
}

/// A user's quota snapshot.
#[inline]
pub fn user_quota(config: &Config, user: &User) -> DiskQuota {
    DiskQuota {
        quota_bytes: user_disk_quota(config, user),
        used_bytes: user.disk_usage,
    }
}

/// Fraction of quota used, in `[0, 1]`. An unlimited quota reports 0.
pub fn user_disk_quota_fraction(config: &Config, user: &User) -> f64 {
    let quota = user_disk_quota(config, user);
    if quota == 0 {
        return 0.0;
    }
    (user.disk_usage as f64 / quota as f64).min(1.0)
}
