//! Live archive registry contract for the silo platform.
//!
//! The replication subsystem owns the authoritative archive state; this
//! crate defines the read-only view the page layer aggregates against,
//! plus an in-memory implementation for tests and demos.

mod error;
mod memory;
mod traits;
mod types;

pub use error::RegistryError;
pub use memory::MemoryRegistry;
pub use traits::ArchiveRegistry;
pub use types::{Archive, Manifest};
