//! Silo server library.
//!
//! Exposes the HTTP surface for integration tests and embedding.

pub mod cli;
pub mod metrics;
mod router;
mod server;
mod sessions;
mod state;

pub use cli::ServerArgs;
pub use router::router;
pub use server::{run_with_shutdown, ServerError};
pub use sessions::{SessionStore, SESSION_HEADER};
pub use state::AppState;
pub use tokio_util::sync::CancellationToken;
