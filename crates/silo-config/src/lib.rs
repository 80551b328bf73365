//! Configuration loading and validation for the silo platform.
//!
//! Supports JSON, YAML, and TOML config files selected by file extension,
//! with CLI overrides layered on top.
//!
//! # Example
//!
//! ```no_run
//! use silo_config::{load_config, validate_config};
//!
//! # fn main() -> Result<(), silo_config::ConfigError> {
//! let config = load_config("silo.toml")?;
//! validate_config(&config)?;
//! # Ok(())
//! # }
//! ```

mod cli;
pub mod defaults;
mod loader;
mod types;
mod validate;

pub use cli::{apply_overrides, CliOverrides};
pub use loader::{load_config, ConfigError};
pub use types::{
    Config, LoggingConfig, MetricsConfig, QuotaConfig, RegistrationConfig, ServerConfig,
    StripeConfig,
};
pub use validate::validate_config;
