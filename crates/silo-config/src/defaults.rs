//! Default configuration values.
//!
//! These constants back the `#[serde(default = "...")]` functions in the
//! config types and are re-exported so other crates can reference the same
//! values in tests and documentation.

/// Default HTTP listen address.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:8080";

/// Default disk quota for basic-plan users (100 MiB).
pub const DEFAULT_BASIC_QUOTA_BYTES: u64 = 100 * 1024 * 1024;

/// Default disk quota for pro-plan users (10 GiB).
pub const DEFAULT_PRO_QUOTA_BYTES: u64 = 10 * 1024 * 1024 * 1024;

/// Whether new registrations are accepted by default.
pub const DEFAULT_REGISTRATION_OPEN: bool = true;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
