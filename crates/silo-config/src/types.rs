//! Configuration type definitions for server, registration, quotas, billing,
//! metrics, and logging.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::defaults;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub registration: RegistrationConfig,
    #[serde(default)]
    pub quota: QuotaConfig,
    /// Billing integration. Absent when the deployment has no paid plans.
    #[serde(default)]
    pub stripe: Option<StripeConfig>,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen address, e.g. `127.0.0.1:8080`.
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Whether new accounts may be created.
    #[serde(default = "default_registration_open")]
    pub open: bool,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            open: default_registration_open(),
        }
    }
}

/// Per-plan disk quota limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaConfig {
    /// Disk quota for basic-plan users, in bytes (0 = unlimited).
    #[serde(default = "default_basic_quota_bytes")]
    pub basic_bytes: u64,
    /// Disk quota for pro-plan users, in bytes (0 = unlimited).
    #[serde(default = "default_pro_quota_bytes")]
    pub pro_bytes: u64,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            basic_bytes: default_basic_quota_bytes(),
            pro_bytes: default_pro_quota_bytes(),
        }
    }
}

impl QuotaConfig {
    /// Resolve the configured quota for a plan, honoring a per-user override.
    ///
    /// A quota of 0 means unlimited.
    #[inline]
    pub fn disk_quota(&self, pro: bool, override_bytes: Option<u64>) -> u64 {
        if let Some(bytes) = override_bytes {
            return bytes;
        }
        if pro {
            self.pro_bytes
        } else {
            self.basic_bytes
        }
    }
}

/// Payment-provider settings. Only the tax rate is consumed by this
/// codebase; checkout flows live in the external billing service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeConfig {
    /// Sales tax percentage applied on upgrade pages (e.g. 8.25).
    pub sales_tax_pct: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Prometheus exporter listen address. Disabled when absent.
    pub listen: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: Option<String>,
    /// Per-module log level filters (e.g., {"silo_pages": "debug"}).
    #[serde(default)]
    pub filters: HashMap<String, String>,
}

fn default_listen() -> String {
    defaults::DEFAULT_LISTEN.to_string()
}

fn default_registration_open() -> bool {
    defaults::DEFAULT_REGISTRATION_OPEN
}

fn default_basic_quota_bytes() -> u64 {
    defaults::DEFAULT_BASIC_QUOTA_BYTES
}

fn default_pro_quota_bytes() -> u64 {
    defaults::DEFAULT_PRO_QUOTA_BYTES
}
