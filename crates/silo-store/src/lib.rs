//! Store records and read-only data-access traits for the silo platform.
//!
//! The page layer consumes users, archives, activity, and featured-archive
//! data exclusively through the traits defined here. In-memory
//! implementations are provided for tests and demos.

mod error;
mod memory;
mod options;
mod records;
mod traits;

pub use error::StoreError;
pub use memory::{MemoryActivity, MemoryArchives, MemoryFeatured, MemoryUsers};
pub use options::{ListOptions, SortOrder};
pub use records::{
    ActivityEvent, ArchiveListing, ArchiveRef, FeaturedArchive, Plan, User, SCOPE_ADMIN_ARCHIVES,
};
pub use traits::{ActivityStore, ArchiveStore, FeaturedStore, UserStore};
