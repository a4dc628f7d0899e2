//! Site HTTP server lifecycle.
//!
//! [`start_server`] binds the address from the `server` section of the
//! site configuration and serves until Ctrl-C, then drains in-flight
//! requests before returning so the caller can tear down the poller.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use valesmp_stats::config::ServerSection;

use crate::router::build_router;
use crate::state::AppState;

/// Run the site HTTP server until shutdown.
///
/// Binds `host:port` from the given config section, builds the router,
/// and serves requests. Returns `Ok(())` after a graceful Ctrl-C
/// shutdown.
///
/// # Errors
///
/// Returns [`ServerError::Address`] when `host:port` does not parse,
/// [`ServerError::Bind`] when the listener cannot bind, and
/// [`ServerError::Serve`] on a fatal I/O error while serving.
pub async fn start_server(server: &ServerSection, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr_text = format!("{}:{}", server.host, server.port);
    let addr: SocketAddr = addr_text
        .parse()
        .map_err(|source| ServerError::Address {
            addr: addr_text.clone(),
            source,
        })?;

    let router = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(%addr, "site server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("site server stopped");
    Ok(())
}

/// Resolve when the process receives Ctrl-C.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        // Without a signal handler the server simply never shuts down
        // gracefully; serving must continue either way.
        Err(error) => warn!(%error, "failed to install shutdown signal handler"),
    }
}

/// Errors from the server lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The configured `host:port` is not a valid socket address.
    #[error("invalid bind address {addr}: {source}")]
    Address {
        /// The address text as configured.
        addr: String,
        /// The underlying parse error.
        source: std::net::AddrParseError,
    },

    /// The TCP listener could not bind.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// The resolved bind address.
        addr: SocketAddr,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The server hit a fatal I/O error while serving.
    #[error("serve error: {source}")]
    Serve {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
