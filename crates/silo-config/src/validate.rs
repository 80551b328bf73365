//! Configuration validation.

use crate::{Config, ConfigError};

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.listen.trim().is_empty() {
        return Err(ConfigError::Validation("server.listen is empty".into()));
    }
    if config.server.listen.parse::<std::net::SocketAddr>().is_err() {
        return Err(ConfigError::Validation(format!(
            "server.listen is not a valid socket address: {}",
            config.server.listen
        )));
    }
    // 0 means unlimited, so only compare when both limits are set.
    if config.quota.pro_bytes != 0
        && config.quota.basic_bytes != 0
        && config.quota.pro_bytes < config.quota.basic_bytes
    {
        return Err(ConfigError::Validation(
            "quota.pro_bytes must be >= quota.basic_bytes".into(),
        ));
    }
    if let Some(ref stripe) = config.stripe {
        if !(0.0..=100.0).contains(&stripe.sales_tax_pct) {
            return Err(ConfigError::Validation(
                "stripe.sales_tax_pct must be in 0..=100".into(),
            ));
        }
    }
    if let Some(ref level) = config.logging.level {
        let valid = ["trace", "debug", "info", "warn", "error"];
        if !valid.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of: {:?}",
                valid
            )));
        }
    }
    if let Some(ref listen) = config.metrics.listen {
        if listen.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "metrics.listen is not a valid socket address: {}",
                listen
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StripeConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn rejects_bad_listen() {
        let mut cfg = Config::default();
        cfg.server.listen = "not-an-address".into();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn rejects_inverted_quotas() {
        let mut cfg = Config::default();
        cfg.quota.basic_bytes = 1000;
        cfg.quota.pro_bytes = 100;
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn zero_quota_is_unlimited_not_inverted() {
        let mut cfg = Config::default();
        cfg.quota.basic_bytes = 1000;
        cfg.quota.pro_bytes = 0;
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn rejects_out_of_range_tax() {
        let mut cfg = Config::default();
        cfg.stripe = Some(StripeConfig {
            sales_tax_pct: 250.0,
        });
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut cfg = Config::default();
        cfg.logging.level = Some("loud".into());
        assert!(validate_config(&cfg).is_err());
    }
}
