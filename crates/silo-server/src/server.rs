//! Server run loop with graceful shutdown.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::router::router;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid listen address '{addr}': {source}")]
    ListenAddr {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Run the HTTP server until the shutdown token is cancelled.
pub async fn run_with_shutdown(
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    let addr: SocketAddr =
        state
            .config
            .server
            .listen
            .parse()
            .map_err(|source| ServerError::ListenAddr {
                addr: state.config.server.listen.clone(),
                source,
            })?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("listening on {}", listener.local_addr()?);

    let app = router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    info!("server stopped");
    Ok(())
}
