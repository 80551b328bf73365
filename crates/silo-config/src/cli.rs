//! CLI override flags shared by silo binaries.

use clap::Parser;

use crate::Config;

/// Command-line overrides applied on top of the loaded config file.
#[derive(Debug, Clone, Parser, Default)]
pub struct CliOverrides {
    /// Override HTTP listen address, e.g. 0.0.0.0:8080
    #[arg(long)]
    pub listen: Option<String>,
    /// Override whether registration is open
    #[arg(long)]
    pub registration_open: Option<bool>,
    /// Override basic-plan disk quota in bytes (0 = unlimited)
    #[arg(long)]
    pub basic_quota_bytes: Option<u64>,
    /// Override pro-plan disk quota in bytes (0 = unlimited)
    #[arg(long)]
    pub pro_quota_bytes: Option<u64>,
    /// Override metrics listen address
    #[arg(long)]
    pub metrics_listen: Option<String>,
    /// Override log level (trace/debug/info/warn/error)
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) {
    if let Some(v) = &overrides.listen {
        config.server.listen = v.clone();
    }
    if let Some(v) = overrides.registration_open {
        config.registration.open = v;
    }
    if let Some(v) = overrides.basic_quota_bytes {
        config.quota.basic_bytes = v;
    }
    if let Some(v) = overrides.pro_quota_bytes {
        config.quota.pro_bytes = v;
    }
    if let Some(v) = &overrides.metrics_listen {
        config.metrics.listen = Some(v.clone());
    }
    if let Some(v) = &overrides.log_level {
        config.logging.level = Some(v.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_file_values() {
        let mut cfg = Config::default();
        let overrides = CliOverrides {
            listen: Some("0.0.0.0:80".into()),
            registration_open: Some(false),
            basic_quota_bytes: Some(1),
            pro_quota_bytes: None,
            metrics_listen: Some("127.0.0.1:9100".into()),
            log_level: Some("debug".into()),
        };
        apply_overrides(&mut cfg, &overrides);
        assert_eq!(cfg.server.listen, "0.0.0.0:80");
        assert!(!cfg.registration.open);
        assert_eq!(cfg.quota.basic_bytes, 1);
        assert_eq!(cfg.quota.pro_bytes, crate::defaults::DEFAULT_PRO_QUOTA_BYTES);
        assert_eq!(cfg.metrics.listen.as_deref(), Some("127.0.0.1:9100"));
        assert_eq!(cfg.logging.level.as_deref(), Some("debug"));
    }
}
